use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::types::{CategoryId, CategoryPath};

pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category documents.
///
/// Lookups return `Ok(None)` when nothing matches; errors are reserved for
/// store failures.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// Retrieve the first category stored under `path`.
    fn get_category_by_path(&self, path: &CategoryPath) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category documents.
pub trait CategoryWriter {
    /// Insert a new category document.
    fn create_category(&self, category: &Category) -> RepositoryResult<usize>;
    /// Replace every field of the document stored under `id`.
    fn replace_category(&self, id: &CategoryId, category: &Category) -> RepositoryResult<usize>;
    /// Delete the document stored under `id`.
    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<usize>;
}
