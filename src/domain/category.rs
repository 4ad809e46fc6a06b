use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CategoryPath};

/// Format used for `created_at`/`updated_at` stamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Canonical category document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub path: CategoryPath,
    pub created_at: String,
    pub updated_at: String,
}

/// Field-wise changes for an existing [`Category`].
///
/// `None` keeps the stored value; the identifier is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<CategoryName>,
    pub path: Option<CategoryPath>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl CategoryPatch {
    /// Merges the patch over `stored`, keeping the stored id.
    pub fn apply(self, stored: Category) -> Category {
        Category {
            id: stored.id,
            name: self.name.unwrap_or(stored.name),
            path: self.path.unwrap_or(stored.path),
            created_at: self.created_at.unwrap_or(stored.created_at),
            updated_at: self.updated_at.unwrap_or(stored.updated_at),
        }
    }
}

/// Derives a category slug from its name.
///
/// Lower-cases, trims and replaces every space with a hyphen. Nothing else is
/// normalized.
pub fn build_path(name: &str) -> String {
    name.to_lowercase().trim().replace(' ', "-")
}

/// Current UTC time rendered with [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string()
}
