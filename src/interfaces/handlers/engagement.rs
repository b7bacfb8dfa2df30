use actix_web::{web, HttpResponse, Responder};

use crate::entities::engagement::{CreditVerification, NewApplication, NewContributor};
use crate::AppState;

pub async fn apply_to_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    request: web::Json<NewApplication>,
) -> impl Responder {
    match state.engagement_handler.apply(&task_id, request.into_inner()).await {
        Ok(applicant) => HttpResponse::Created().json(applicant),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_applicants(state: web::Data<AppState>, task_id: web::Path<String>) -> impl Responder {
    match state.engagement_handler.list_applicants(&task_id).await {
        Ok(applicants) => HttpResponse::Ok().json(applicants),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_applications(state: web::Data<AppState>, profile_id: web::Path<String>) -> impl Responder {
    match state.engagement_handler.list_applications(&profile_id).await {
        Ok(applications) => HttpResponse::Ok().json(applications),
        Err(e) => e.to_http_response(),
    }
}

pub async fn withdraw_application(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (task_id, profile_id) = path.into_inner();
    match state.engagement_handler.withdraw(&task_id, &profile_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}

pub async fn select_contributor(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    request: web::Json<NewContributor>,
) -> impl Responder {
    match state.engagement_handler.select_contributor(&task_id, request.into_inner()).await {
        Ok(contributor) => HttpResponse::Created().json(contributor),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_contributors(state: web::Data<AppState>, task_id: web::Path<String>) -> impl Responder {
    match state.engagement_handler.list_contributors(&task_id).await {
        Ok(contributors) => HttpResponse::Ok().json(contributors),
        Err(e) => e.to_http_response(),
    }
}

pub async fn verify_credit(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<CreditVerification>,
) -> impl Responder {
    let (task_id, profile_id) = path.into_inner();
    match state.engagement_handler.verify_credit(&task_id, &profile_id, request.into_inner()).await {
        Ok(contributor) => HttpResponse::Ok().json(contributor),
        Err(e) => e.to_http_response(),
    }
}

pub async fn remove_contributor(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (task_id, profile_id) = path.into_inner();
    match state.engagement_handler.remove_contributor(&task_id, &profile_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
