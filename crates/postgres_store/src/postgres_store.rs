pub(crate) mod converter;
mod postgres_webinar_store;
pub(crate) mod schema;

pub use self::postgres_webinar_store::*;
