use actix_web::{web, HttpResponse, Responder};

use crate::entities::project::{NewProject, ProjectQuery, UpdateProjectRequest};
use crate::entities::task::NewTask;
use crate::AppState;

pub async fn create_project(state: web::Data<AppState>, request: web::Json<NewProject>) -> impl Responder {
    match state.project_handler.create_project(request.into_inner()).await {
        Ok(project) => HttpResponse::Created().json(project),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_projects(state: web::Data<AppState>, query: web::Query<ProjectQuery>) -> impl Responder {
    match state.project_handler.list_projects(query.into_inner()).await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_project(state: web::Data<AppState>, project_id: web::Path<String>) -> impl Responder {
    match state.project_handler.get_project(&project_id).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(e) => e.to_http_response(),
    }
}

pub async fn update_project(
    state: web::Data<AppState>,
    project_id: web::Path<String>,
    request: web::Json<UpdateProjectRequest>,
) -> impl Responder {
    match state.project_handler.update_project(&project_id, request.into_inner()).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(e) => e.to_http_response(),
    }
}

pub async fn delete_project(state: web::Data<AppState>, project_id: web::Path<String>) -> impl Responder {
    match state.project_handler.delete_project(&project_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}

pub async fn create_task(
    state: web::Data<AppState>,
    project_id: web::Path<String>,
    request: web::Json<NewTask>,
) -> impl Responder {
    match state.task_handler.create_task(&project_id, request.into_inner()).await {
        Ok(task) => HttpResponse::Created().json(task),
        Err(e) => e.to_http_response(),
    }
}

pub async fn list_tasks(state: web::Data<AppState>, project_id: web::Path<String>) -> impl Responder {
    match state.task_handler.list_tasks(&project_id).await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(e) => e.to_http_response(),
    }
}
