use actix_web::web;

use crate::handlers::{engagement, ratings, tasks};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .service(
                web::resource("/{task_id}")
                    .route(web::get().to(tasks::get_task))
                    .route(web::patch().to(tasks::update_task))
                    .route(web::delete().to(tasks::delete_task))
            )
            .service(
                web::resource("/{task_id}/skills")
                    .route(web::get().to(tasks::list_skill_requirements))
                    .route(web::put().to(tasks::set_skill_requirement))
            )
            .service(
                web::resource("/{task_id}/skills/{skill_id}")
                    .route(web::delete().to(tasks::remove_skill_requirement))
            )
            .service(
                web::resource("/{task_id}/languages")
                    .route(web::get().to(tasks::list_language_requirements))
                    .route(web::put().to(tasks::set_language_requirement))
            )
            .service(
                web::resource("/{task_id}/languages/{language_id}")
                    .route(web::delete().to(tasks::remove_language_requirement))
            )
            .service(
                web::resource("/{task_id}/applicants")
                    .route(web::post().to(engagement::apply_to_task))
                    .route(web::get().to(engagement::list_applicants))
            )
            .service(
                web::resource("/{task_id}/applicants/{profile_id}")
                    .route(web::delete().to(engagement::withdraw_application))
            )
            .service(
                web::resource("/{task_id}/contributors")
                    .route(web::post().to(engagement::select_contributor))
                    .route(web::get().to(engagement::list_contributors))
            )
            .service(
                web::resource("/{task_id}/contributors/{profile_id}")
                    .route(web::patch().to(engagement::verify_credit))
                    .route(web::delete().to(engagement::remove_contributor))
            )
            .service(
                web::resource("/{task_id}/rating")
                    .route(web::post().to(ratings::rate_task))
                    .route(web::get().to(ratings::get_rating))
                    .route(web::patch().to(ratings::update_rating))
                    .route(web::delete().to(ratings::delete_rating))
            )
    );
}
