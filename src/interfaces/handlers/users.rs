use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

pub async fn get_user(state: web::Data<AppState>, user_id: web::Path<String>) -> impl Responder {
    match state.account_handler.get_user(&user_id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => e.to_http_response(),
    }
}

pub async fn delete_user(state: web::Data<AppState>, user_id: web::Path<String>) -> impl Responder {
    match state.account_handler.delete_account(&user_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
