pub mod categories;
pub mod errors;

pub use errors::{CategoryError, CategoryNotFoundError, ServiceError, ServiceResult};
