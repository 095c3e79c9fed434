mod postgres_store;

pub use self::postgres_store::*;
