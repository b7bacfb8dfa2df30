use actix_web::web;

use crate::handlers::{engagement, notifications, profiles};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profiles")
            .service(
                web::resource("")
                    .route(web::post().to(profiles::create_profile))
            )
            .service(
                web::resource("/{profile_id}")
                    .route(web::get().to(profiles::get_profile))
                    .route(web::patch().to(profiles::update_profile))
                    .route(web::delete().to(profiles::delete_profile))
            )
            .service(
                web::resource("/{profile_id}/image")
                    .route(web::put().to(profiles::upload_profile_image))
            )
            .service(
                web::resource("/{profile_id}/skills")
                    .route(web::get().to(profiles::list_profile_skills))
                    .route(web::put().to(profiles::set_profile_skill))
            )
            .service(
                web::resource("/{profile_id}/skills/{skill_id}")
                    .route(web::delete().to(profiles::remove_profile_skill))
            )
            .service(
                web::resource("/{profile_id}/languages")
                    .route(web::get().to(profiles::list_profile_languages))
                    .route(web::put().to(profiles::set_profile_language))
            )
            .service(
                web::resource("/{profile_id}/languages/{language_id}")
                    .route(web::delete().to(profiles::remove_profile_language))
            )
            .service(
                web::resource("/{profile_id}/applications")
                    .route(web::get().to(engagement::list_applications))
            )
            .service(
                web::resource("/{profile_id}/notifications")
                    .route(web::get().to(notifications::inbox))
            )
    );
}
