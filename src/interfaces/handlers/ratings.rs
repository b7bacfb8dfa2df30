use actix_web::{web, HttpResponse, Responder};

use crate::entities::rating::{NewUserRating, UpdateUserRatingRequest};
use crate::AppState;

pub async fn rate_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    request: web::Json<NewUserRating>,
) -> impl Responder {
    match state.rating_handler.rate_task(&task_id, request.into_inner()).await {
        Ok(rating) => HttpResponse::Created().json(rating),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_rating(state: web::Data<AppState>, task_id: web::Path<String>) -> impl Responder {
    match state.rating_handler.get_rating(&task_id).await {
        Ok(rating) => HttpResponse::Ok().json(rating),
        Err(e) => e.to_http_response(),
    }
}

pub async fn update_rating(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    request: web::Json<UpdateUserRatingRequest>,
) -> impl Responder {
    match state.rating_handler.update_rating(&task_id, request.into_inner()).await {
        Ok(rating) => HttpResponse::Ok().json(rating),
        Err(e) => e.to_http_response(),
    }
}

pub async fn delete_rating(state: web::Data<AppState>, task_id: web::Path<String>) -> impl Responder {
    match state.rating_handler.delete_rating(&task_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
