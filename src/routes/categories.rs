use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::categories::CategoryDto;
use crate::forms::categories::{
    SaveCategoryForm, SaveCategoryPayload, UpdateCategoryForm, UpdateCategoryPayload,
};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::ServiceError;
use crate::services::categories::{
    delete_category as delete_category_service,
    load_category_by_path as load_category_by_path_service,
    save_category as save_category_service, update_category as update_category_service,
};

#[get("/v1/category/{path}")]
pub async fn get_category(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match load_category_by_path_service(&path, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(err) => service_error_response(&err),
    }
}

#[post("/v1/category")]
pub async fn save_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SaveCategoryForm>,
) -> impl Responder {
    let payload: SaveCategoryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match save_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Created().json(CategoryDto::from(category)),
        Err(err) => service_error_response(&err),
    }
}

#[put("/v1/category/{id}")]
pub async fn update_category(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateCategoryForm>,
) -> impl Responder {
    let payload: UpdateCategoryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match update_category_service(&id, payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(err) => service_error_response(&err),
    }
}

#[delete("/v1/category/{id}")]
pub async fn delete_category(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_category_service(&id, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(err) => service_error_response(&err),
    }
}
