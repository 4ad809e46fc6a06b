//! Lifecycle rules for the category resource.
//!
//! Every function here performs one request/response exchange against the
//! store. There is no locking and no version check, so concurrent updates of
//! the same document can overwrite each other.

use crate::domain::category::{Category, timestamp_now};
use crate::domain::types::{CategoryId, CategoryPath};
use crate::forms::categories::{SaveCategoryPayload, UpdateCategoryPayload};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{CategoryError, CategoryNotFoundError, ServiceResult};

pub use crate::domain::category::build_path;

/// Creates a category with a freshly minted id.
///
/// The path is derived from the name when the payload carries none. Both
/// timestamps receive the same value.
pub fn save_category<R>(payload: SaveCategoryPayload, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    let path = payload
        .path
        .unwrap_or_else(|| CategoryPath::from_name(&payload.name));
    let now = timestamp_now();

    let category = Category {
        id: CategoryId::generate(),
        name: payload.name,
        path,
        created_at: now.clone(),
        updated_at: now,
    };

    match repo.create_category(&category) {
        Ok(_) => {
            log::info!("Category {category:?} was saved successfully.");
            Ok(category)
        }
        Err(e) => {
            log::error!(
                "Category {} could not be saved with exception {e}",
                category.name
            );
            Err(CategoryError::SaveFailed(category.name.into_inner()).into())
        }
    }
}

/// Returns the category stored under `path`.
pub fn load_category_by_path<R>(path: &str, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    let not_found = || CategoryNotFoundError::ByPath(path.to_string());

    let category_path = CategoryPath::new(path).map_err(|_| not_found())?;

    match repo.get_category_by_path(&category_path) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(not_found().into()),
        Err(e) => {
            log::error!("Category path {path} could not be loaded with exception {e}");
            Err(CategoryError::LoadFailed(path.to_string()).into())
        }
    }
}

/// Merges `payload` over the stored category and replaces it.
///
/// A missing category is reported by the request's path, never by the id being
/// updated. A request without a path reports an empty path.
pub fn update_category<R>(
    id: &str,
    payload: UpdateCategoryPayload,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let patch = payload.patch;
    let not_found = || {
        let path = patch.path.as_ref().map(ToString::to_string);
        CategoryNotFoundError::ByPath(path.unwrap_or_default())
    };
    let request_name = patch.name.as_ref().map(ToString::to_string);

    let category_id = CategoryId::new(id).map_err(|_| not_found())?;

    let stored = match repo.get_category_by_id(&category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(not_found().into()),
        Err(e) => {
            log::error!("Category with id {id} could not be loaded with exception {e}");
            let name = request_name.unwrap_or_else(|| id.to_string());
            return Err(CategoryError::UpdateFailed(name).into());
        }
    };

    let category = patch.apply(stored);

    match repo.replace_category(&category.id, &category) {
        Ok(_) => {
            log::info!("Category {category:?} was updated successfully.");
            Ok(category)
        }
        Err(e) => {
            let name = request_name.unwrap_or_else(|| category.name.to_string());
            log::error!("Category {name} could not be updated with exception {e}");
            Err(CategoryError::UpdateFailed(name).into())
        }
    }
}

/// Deletes the category stored under `id`, returning its last known value.
pub fn delete_category<R>(id: &str, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let not_found = || CategoryNotFoundError::ById(id.to_string());

    let category_id = CategoryId::new(id).map_err(|_| not_found())?;

    let stored = match repo.get_category_by_id(&category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(not_found().into()),
        Err(e) => {
            log::error!("Category with id {id} could not be loaded with exception {e}");
            return Err(CategoryError::DeleteFailed(id.to_string()).into());
        }
    };

    match repo.delete_category(&category_id) {
        Ok(_) => {
            log::info!("Category {stored:?} was deleted successfully.");
            Ok(stored)
        }
        Err(e) => {
            log::error!("Category with id {id} could not be deleted with exception {e}");
            Err(CategoryError::DeleteFailed(id.to_string()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryPatch;
    use crate::domain::types::CategoryName;
    use crate::repository::test::TestRepository;
    use crate::services::ServiceError;

    fn save_payload(name: &str, path: Option<&str>) -> SaveCategoryPayload {
        SaveCategoryPayload {
            name: CategoryName::new(name).unwrap(),
            path: path.map(|p| CategoryPath::new(p).unwrap()),
        }
    }

    fn sample_category() -> Category {
        Category {
            id: CategoryId::new("0b7c9c1e-6f4d-4c8a-9a57-3f1f0d1e2a10").unwrap(),
            name: CategoryName::new("Shirts").unwrap(),
            path: CategoryPath::new("shirts").unwrap(),
            created_at: "2024-03-01T09:00:00.000".to_string(),
            updated_at: "2024-03-02T09:00:00.000".to_string(),
        }
    }

    #[test]
    fn saved_category_round_trips_through_its_derived_path() {
        let repo = TestRepository::default();

        let saved = save_category(save_payload("Jeans For Men", None), &repo).unwrap();
        let loaded = load_category_by_path("jeans-for-men", &repo).unwrap();

        assert_eq!(loaded, saved);
        assert_eq!(loaded.name, "Jeans For Men");
        assert_eq!(loaded.path, "jeans-for-men");
        assert!(!loaded.id.is_empty());
        assert!(!loaded.created_at.is_empty());
        assert_eq!(loaded.created_at, loaded.updated_at);
    }

    #[test]
    fn save_keeps_a_supplied_path() {
        let repo = TestRepository::default();

        let saved = save_category(save_payload("Jeans For Men", Some("jeans")), &repo).unwrap();

        assert_eq!(saved.path, "jeans");
        assert_eq!(repo.categories(), vec![saved]);
    }

    #[test]
    fn save_stores_supplied_values_byte_for_byte() {
        let repo = TestRepository::default();

        let saved = save_category(save_payload("  Jeans ", Some(" Denim ")), &repo).unwrap();

        assert_eq!(saved.name, "  Jeans ");
        assert_eq!(saved.path, " Denim ");
        assert_eq!(load_category_by_path(" Denim ", &repo).unwrap(), saved);
        assert!(matches!(
            load_category_by_path("Denim", &repo),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn load_does_not_trim_the_requested_path() {
        let repo = TestRepository::new(vec![sample_category()]);

        let err = load_category_by_path(" shirts", &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::NotFound(CategoryNotFoundError::ByPath(" shirts".into()))
        );
    }

    #[test]
    fn save_mints_distinct_ids_for_colliding_paths() {
        let repo = TestRepository::default();

        let first = save_category(save_payload("Caps", None), &repo).unwrap();
        let second = save_category(save_payload("Caps", None), &repo).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(load_category_by_path("caps", &repo).unwrap().id, first.id);
    }

    #[test]
    fn save_failure_reports_the_category_name() {
        let repo = TestRepository::default().failing_writes();

        let err = save_category(save_payload("Jeans For Men", None), &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::Category(CategoryError::SaveFailed("Jeans For Men".into()))
        );
        assert_eq!(err.code(), "CE-002");
    }

    #[test]
    fn repeated_loads_return_identical_content() {
        let repo = TestRepository::new(vec![sample_category()]);

        let first = load_category_by_path("shirts", &repo).unwrap();
        let second = load_category_by_path("shirts", &repo).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn load_of_unknown_path_is_not_found() {
        let repo = TestRepository::new(vec![sample_category()]);

        let err = load_category_by_path("hats", &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::NotFound(CategoryNotFoundError::ByPath("hats".into()))
        );
        assert_eq!(err.code(), "CE-001");
    }

    #[test]
    fn load_failure_is_an_operation_failure() {
        let repo = TestRepository::new(vec![sample_category()]).failing_reads();

        let err = load_category_by_path("shirts", &repo).unwrap_err();

        assert!(matches!(err, ServiceError::Category(CategoryError::LoadFailed(_))));
    }

    #[test]
    fn empty_update_preserves_every_field() {
        let stored = sample_category();
        let repo = TestRepository::new(vec![stored.clone()]);

        let updated =
            update_category(stored.id.as_str(), UpdateCategoryPayload::default(), &repo).unwrap();

        assert_eq!(updated, stored);
        assert_eq!(repo.categories(), vec![stored]);
    }

    #[test]
    fn name_only_update_leaves_other_fields_untouched() {
        let stored = sample_category();
        let repo = TestRepository::new(vec![stored.clone()]);
        let payload = UpdateCategoryPayload {
            patch: CategoryPatch {
                name: Some(CategoryName::new("Polo Shirts").unwrap()),
                ..Default::default()
            },
        };

        let updated = update_category(stored.id.as_str(), payload, &repo).unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.name, "Polo Shirts");
        assert_eq!(updated.path, stored.path);
        assert_eq!(updated.created_at, stored.created_at);
        assert_eq!(updated.updated_at, stored.updated_at);
        assert_eq!(repo.categories(), vec![updated]);
    }

    #[test]
    fn update_takes_empty_timestamps_as_sent() {
        let stored = sample_category();
        let repo = TestRepository::new(vec![stored.clone()]);
        let payload = UpdateCategoryPayload {
            patch: CategoryPatch {
                created_at: Some(String::new()),
                updated_at: Some(String::new()),
                ..Default::default()
            },
        };

        let updated = update_category(stored.id.as_str(), payload, &repo).unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.name, stored.name);
        assert_eq!(updated.created_at, "");
        assert_eq!(updated.updated_at, "");
    }

    #[test]
    fn update_of_unknown_id_reports_request_path() {
        let repo = TestRepository::new(vec![sample_category()]);
        let payload = UpdateCategoryPayload {
            patch: CategoryPatch {
                path: Some(CategoryPath::new("hats").unwrap()),
                ..Default::default()
            },
        };

        let err = update_category("missing", payload, &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::NotFound(CategoryNotFoundError::ByPath("hats".into()))
        );
        assert_eq!(repo.categories(), vec![sample_category()]);
    }

    #[test]
    fn update_of_unknown_id_without_path_reports_empty_path() {
        let repo = TestRepository::default();

        let err = update_category("missing", UpdateCategoryPayload::default(), &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::NotFound(CategoryNotFoundError::ByPath(String::new()))
        );
        assert!(repo.categories().is_empty());
    }

    #[test]
    fn update_failure_reports_the_request_name() {
        let stored = sample_category();
        let repo = TestRepository::new(vec![stored.clone()]).failing_writes();
        let payload = UpdateCategoryPayload {
            patch: CategoryPatch {
                name: Some(CategoryName::new("Tees").unwrap()),
                ..Default::default()
            },
        };

        let err = update_category(stored.id.as_str(), payload, &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::Category(CategoryError::UpdateFailed("Tees".into()))
        );
        assert_eq!(repo.categories(), vec![stored]);
    }

    #[test]
    fn delete_returns_the_removed_document() {
        let stored = sample_category();
        let repo = TestRepository::new(vec![stored.clone()]);

        let deleted = delete_category(stored.id.as_str(), &repo).unwrap();

        assert_eq!(deleted, stored);
        assert!(repo.get_category_by_id(&stored.id).unwrap().is_none());
        assert!(matches!(
            load_category_by_path("shirts", &repo),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn delete_of_unknown_id_is_not_found() {
        let repo = TestRepository::new(vec![sample_category()]);

        let err = delete_category("missing", &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::NotFound(CategoryNotFoundError::ById("missing".into()))
        );
        assert_eq!(repo.categories().len(), 1);
    }

    #[test]
    fn delete_failure_reports_the_id() {
        let stored = sample_category();
        let repo = TestRepository::new(vec![stored.clone()]).failing_writes();

        let err = delete_category(stored.id.as_str(), &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::Category(CategoryError::DeleteFailed(stored.id.to_string()))
        );
    }
}
