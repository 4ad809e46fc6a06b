use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, CategoryName, CategoryPath, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub path: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Replacement form of [`Category`]; everything except the primary key.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChangeset {
    pub name: String,
    pub path: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(category.id)?,
            name: CategoryName::new(category.name)?,
            path: CategoryPath::new(category.path)?,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}

impl From<DomainCategory> for Category {
    fn from(category: DomainCategory) -> Self {
        Self {
            id: category.id.into_inner(),
            name: category.name.into_inner(),
            path: category.path.into_inner(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl From<DomainCategory> for CategoryChangeset {
    fn from(category: DomainCategory) -> Self {
        Self {
            name: category.name.into_inner(),
            path: category.path.into_inner(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
