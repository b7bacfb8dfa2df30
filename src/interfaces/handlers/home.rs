use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Student project marketplace API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "signup": "/auth/signup",
        "api": "/api"
    }))
}
