use actix_web::{web, HttpResponse, Responder};

use crate::entities::task::{SetLanguageRequirement, SetSkillRequirement, UpdateTaskRequest};
use crate::AppState;

pub async fn get_task(state: web::Data<AppState>, task_id: web::Path<String>) -> impl Responder {
    match state.task_handler.get_task(&task_id).await {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(e) => e.to_http_response(),
    }
}

pub async fn update_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    request: web::Json<UpdateTaskRequest>,
) -> impl Responder {
    match state.task_handler.update_task(&task_id, request.into_inner()).await {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(e) => e.to_http_response(),
    }
}

pub async fn delete_task(state: web::Data<AppState>, task_id: web::Path<String>) -> impl Responder {
    match state.task_handler.delete_task(&task_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}

pub async fn set_skill_requirement(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    request: web::Json<SetSkillRequirement>,
) -> impl Responder {
    match state.task_handler.set_skill_requirement(&task_id, request.into_inner()).await {
        Ok(requirement) => HttpResponse::Ok().json(requirement),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_skill_requirements(state: web::Data<AppState>, task_id: web::Path<String>) -> impl Responder {
    match state.task_handler.list_skill_requirements(&task_id).await {
        Ok(requirements) => HttpResponse::Ok().json(requirements),
        Err(e) => e.to_http_response(),
    }
}

pub async fn remove_skill_requirement(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (task_id, skill_id) = path.into_inner();
    match state.task_handler.remove_skill_requirement(&task_id, &skill_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}

pub async fn set_language_requirement(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    request: web::Json<SetLanguageRequirement>,
) -> impl Responder {
    match state.task_handler.set_language_requirement(&task_id, request.into_inner()).await {
        Ok(requirement) => HttpResponse::Ok().json(requirement),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_language_requirements(state: web::Data<AppState>, task_id: web::Path<String>) -> impl Responder {
    match state.task_handler.list_language_requirements(&task_id).await {
        Ok(requirements) => HttpResponse::Ok().json(requirements),
        Err(e) => e.to_http_response(),
    }
}

pub async fn remove_language_requirement(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (task_id, language_id) = path.into_inner();
    match state.task_handler.remove_language_requirement(&task_id, &language_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
