//! Domain entities and value objects.

pub mod category;
pub mod types;
