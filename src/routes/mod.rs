use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error, web};

use crate::dto::categories::ApiError;
use crate::services::ServiceError;

pub mod categories;

/// Registers every category endpoint together with the JSON error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(categories::get_category)
        .service(categories::save_category)
        .service(categories::update_category)
        .service(categories::delete_category);
}

/// Renders a [`ServiceError`] as an [`ApiError`] body.
///
/// Missing categories (`CE-001`) and failed store operations (`CE-002`) both
/// answer 404; clients tell them apart by `code`. `CE-003` with 400 is only
/// produced for request bodies that fail decoding or form validation before
/// any service function runs.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    let status = match err {
        ServiceError::NotFound(_) | ServiceError::Category(_) => StatusCode::NOT_FOUND,
        ServiceError::Form(_) => StatusCode::BAD_REQUEST,
    };
    HttpResponse::build(status).json(ApiError::from_service_error(status.as_u16(), err))
}

/// Rejects undecodable JSON bodies with the same error shape as the service.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = service_error_response(&ServiceError::Form(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}
