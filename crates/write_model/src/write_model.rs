pub mod aggregate;
pub mod value_object;
