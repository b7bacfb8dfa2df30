use actix_web::{web, HttpResponse, Responder};

use crate::entities::language::NewLanguage;
use crate::entities::skill::NewSkill;
use crate::AppState;

pub async fn create_skill(state: web::Data<AppState>, request: web::Json<NewSkill>) -> impl Responder {
    match state.catalog_handler.create_skill(request.into_inner()).await {
        Ok(skill) => HttpResponse::Created().json(skill),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_skills(state: web::Data<AppState>) -> impl Responder {
    match state.catalog_handler.list_skills().await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_skill(state: web::Data<AppState>, skill_id: web::Path<String>) -> impl Responder {
    match state.catalog_handler.get_skill(&skill_id).await {
        Ok(skill) => HttpResponse::Ok().json(skill),
        Err(e) => e.to_http_response(),
    }
}

pub async fn rename_skill(
    state: web::Data<AppState>,
    skill_id: web::Path<String>,
    request: web::Json<NewSkill>,
) -> impl Responder {
    match state.catalog_handler.rename_skill(&skill_id, request.into_inner()).await {
        Ok(skill) => HttpResponse::Ok().json(skill),
        Err(e) => e.to_http_response(),
    }
}

pub async fn delete_skill(state: web::Data<AppState>, skill_id: web::Path<String>) -> impl Responder {
    match state.catalog_handler.delete_skill(&skill_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}

pub async fn create_language(state: web::Data<AppState>, request: web::Json<NewLanguage>) -> impl Responder {
    match state.catalog_handler.create_language(request.into_inner()).await {
        Ok(language) => HttpResponse::Created().json(language),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_languages(state: web::Data<AppState>) -> impl Responder {
    match state.catalog_handler.list_languages().await {
        Ok(languages) => HttpResponse::Ok().json(languages),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_language(state: web::Data<AppState>, language_id: web::Path<String>) -> impl Responder {
    match state.catalog_handler.get_language(&language_id).await {
        Ok(language) => HttpResponse::Ok().json(language),
        Err(e) => e.to_http_response(),
    }
}

pub async fn rename_language(
    state: web::Data<AppState>,
    language_id: web::Path<String>,
    request: web::Json<NewLanguage>,
) -> impl Responder {
    match state.catalog_handler.rename_language(&language_id, request.into_inner()).await {
        Ok(language) => HttpResponse::Ok().json(language),
        Err(e) => e.to_http_response(),
    }
}

pub async fn delete_language(state: web::Data<AppState>, language_id: web::Path<String>) -> impl Responder {
    match state.catalog_handler.delete_language(&language_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
