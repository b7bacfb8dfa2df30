use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Responder};

use crate::entities::language::SetProfileLanguage;
use crate::entities::profile::{NewProfile, ProfileImageUpload, UpdateProfileRequest};
use crate::entities::skill::SetProfileSkill;
use crate::errors::AppError;
use crate::AppState;

pub async fn create_profile(state: web::Data<AppState>, request: web::Json<NewProfile>) -> impl Responder {
    match state.profile_handler.create_profile(request.into_inner()).await {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_profile(state: web::Data<AppState>, profile_id: web::Path<String>) -> impl Responder {
    match state.profile_handler.get_profile(&profile_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => e.to_http_response(),
    }
}

pub async fn update_profile(
    state: web::Data<AppState>,
    profile_id: web::Path<String>,
    request: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    match state.profile_handler.update_profile(&profile_id, request.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => e.to_http_response(),
    }
}

pub async fn delete_profile(state: web::Data<AppState>, profile_id: web::Path<String>) -> impl Responder {
    match state.profile_handler.delete_profile(&profile_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}

pub async fn upload_profile_image(
    state: web::Data<AppState>,
    profile_id: web::Path<String>,
    form: MultipartForm<ProfileImageUpload>,
) -> impl Responder {
    let upload = form.into_inner();

    let bytes = match tokio::fs::read(upload.image.file.path()).await {
        Ok(bytes) => bytes,
        Err(e) => return AppError::from(e).to_http_response(),
    };

    match state.profile_handler.upload_image(&profile_id, &bytes).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => e.to_http_response(),
    }
}

pub async fn set_profile_skill(
    state: web::Data<AppState>,
    profile_id: web::Path<String>,
    request: web::Json<SetProfileSkill>,
) -> impl Responder {
    match state.catalog_handler.set_profile_skill(&profile_id, request.into_inner()).await {
        Ok(skill) => HttpResponse::Ok().json(skill),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_profile_skills(state: web::Data<AppState>, profile_id: web::Path<String>) -> impl Responder {
    match state.catalog_handler.list_profile_skills(&profile_id).await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(e) => e.to_http_response(),
    }
}

pub async fn remove_profile_skill(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (profile_id, skill_id) = path.into_inner();
    match state.catalog_handler.remove_profile_skill(&profile_id, &skill_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}

pub async fn set_profile_language(
    state: web::Data<AppState>,
    profile_id: web::Path<String>,
    request: web::Json<SetProfileLanguage>,
) -> impl Responder {
    match state.catalog_handler.set_profile_language(&profile_id, request.into_inner()).await {
        Ok(language) => HttpResponse::Ok().json(language),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_profile_languages(state: web::Data<AppState>, profile_id: web::Path<String>) -> impl Responder {
    match state.catalog_handler.list_profile_languages(&profile_id).await {
        Ok(languages) => HttpResponse::Ok().json(languages),
        Err(e) => e.to_http_response(),
    }
}

pub async fn remove_profile_language(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (profile_id, language_id) = path.into_inner();
    match state.catalog_handler.remove_profile_language(&profile_id, &language_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
