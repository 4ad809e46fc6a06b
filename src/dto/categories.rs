use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::services::ServiceError;

/// Wire representation of a [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub path: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.into_inner(),
            name: value.name.into_inner(),
            path: value.path.into_inner(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// One entry of an [`ApiError`] body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetails {
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub links: Vec<String>,
}

/// Error body returned by every category endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiError {
    pub errors: Vec<ApiErrorDetails>,
}

impl ApiError {
    pub fn single(status: u16, detail: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            errors: vec![ApiErrorDetails {
                status,
                detail: detail.into(),
                code: code.into(),
                links: Vec::new(),
            }],
        }
    }

    pub fn from_service_error(status: u16, err: &ServiceError) -> Self {
        Self::single(status, err.to_string(), err.code())
    }
}
