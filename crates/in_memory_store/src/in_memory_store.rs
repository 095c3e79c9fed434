mod in_memory_webinar_store;

pub use self::in_memory_webinar_store::*;
