use actix_web::{web, HttpResponse, Responder};

use crate::entities::notification::{InboxQuery, NewNotification};
use crate::AppState;

pub async fn send_notification(state: web::Data<AppState>, request: web::Json<NewNotification>) -> impl Responder {
    match state.notification_handler.send(request.into_inner()).await {
        Ok(notification) => HttpResponse::Created().json(notification),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_notification(state: web::Data<AppState>, notification_id: web::Path<String>) -> impl Responder {
    match state.notification_handler.get_notification(&notification_id).await {
        Ok(notification) => HttpResponse::Ok().json(notification),
        Err(e) => e.to_http_response(),
    }
}

pub async fn inbox(
    state: web::Data<AppState>,
    profile_id: web::Path<String>,
    query: web::Query<InboxQuery>,
) -> impl Responder {
    match state.notification_handler.inbox(&profile_id, query.into_inner()).await {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(e) => e.to_http_response(),
    }
}

pub async fn mark_read(state: web::Data<AppState>, notification_id: web::Path<String>) -> impl Responder {
    match state.notification_handler.mark_read(&notification_id).await {
        Ok(notification) => HttpResponse::Ok().json(notification),
        Err(e) => e.to_http_response(),
    }
}

pub async fn delete_notification(state: web::Data<AppState>, notification_id: web::Path<String>) -> impl Responder {
    match state.notification_handler.delete_notification(&notification_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
