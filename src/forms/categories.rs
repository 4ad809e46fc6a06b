use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::CategoryPatch;
use crate::domain::types::{CategoryName, CategoryPath, TypeConstraintError};

/// Treats missing, empty and whitespace-only names and paths alike.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// JSON body accepted by `POST /v1/category`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveCategoryPayload {
    pub name: CategoryName,
    /// `None` means the path is derived from the name.
    pub path: Option<CategoryPath>,
}

#[derive(Debug, Error)]
pub enum SaveCategoryFormError {
    #[error("Save category form validation failed: {0}")]
    Validation(String),
    #[error("Save category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SaveCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SaveCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SaveCategoryForm> for SaveCategoryPayload {
    type Error = SaveCategoryFormError;

    fn try_from(value: SaveCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.name)?,
            path: non_blank(value.path).map(CategoryPath::new).transpose()?,
        })
    }
}

/// JSON body accepted by `PUT /v1/category/{id}`.
///
/// Every field is optional. A blank name or path counts as absent so neither is
/// ever overwritten with an empty string; timestamps are taken as sent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryForm {
    pub name: Option<String>,
    pub path: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCategoryPayload {
    pub patch: CategoryPatch,
}

#[derive(Debug, Error)]
pub enum UpdateCategoryFormError {
    #[error("Update category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for UpdateCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateCategoryForm> for UpdateCategoryPayload {
    type Error = UpdateCategoryFormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        Ok(Self {
            patch: CategoryPatch {
                name: non_blank(value.name).map(CategoryName::new).transpose()?,
                path: non_blank(value.path).map(CategoryPath::new).transpose()?,
                created_at: value.created_at,
                updated_at: value.updated_at,
            },
        })
    }
}
