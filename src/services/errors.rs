use thiserror::Error;

/// Stable error code for "no such category".
pub const NOT_FOUND_CODE: &str = "CE-001";
/// Stable error code for a failed store operation.
pub const OPERATION_FAILED_CODE: &str = "CE-002";
/// Error code for a request body rejected during decoding or form validation,
/// before reaching the service.
pub const INVALID_REQUEST_CODE: &str = "CE-003";

/// The requested category has no matching document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryNotFoundError {
    #[error("Category path [{0}] could not be found")]
    ByPath(String),
    #[error("Category id [{0}] could not be found")]
    ById(String),
}

/// The store rejected or failed an operation on a category.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category [{0}] could not be saved")]
    SaveFailed(String),
    #[error("Category [{0}] could not be updated")]
    UpdateFailed(String),
    #[error("Category with id [{0}] could not be deleted")]
    DeleteFailed(String),
    #[error("Category path [{0}] could not be loaded")]
    LoadFailed(String),
}

/// Generic error type used by service layer functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error(transparent)]
    NotFound(#[from] CategoryNotFoundError),
    /// A store operation failed.
    #[error(transparent)]
    Category(#[from] CategoryError),
    /// The request payload was invalid.
    #[error("{0}")]
    Form(String),
}

impl ServiceError {
    /// Error code clients branch on.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => NOT_FOUND_CODE,
            Self::Category(_) => OPERATION_FAILED_CODE,
            Self::Form(_) => INVALID_REQUEST_CODE,
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
