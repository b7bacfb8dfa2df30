use actix_web::web;

use crate::handlers::catalog;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("")
                    .route(web::post().to(catalog::create_skill))
                    .route(web::get().to(catalog::list_skills))
            )
            .service(
                web::resource("/{skill_id}")
                    .route(web::get().to(catalog::get_skill))
                    .route(web::patch().to(catalog::rename_skill))
                    .route(web::delete().to(catalog::delete_skill))
            )
    );

    cfg.service(
        web::scope("/languages")
            .service(
                web::resource("")
                    .route(web::post().to(catalog::create_language))
                    .route(web::get().to(catalog::list_languages))
            )
            .service(
                web::resource("/{language_id}")
                    .route(web::get().to(catalog::get_language))
                    .route(web::patch().to(catalog::rename_language))
                    .route(web::delete().to(catalog::delete_language))
            )
    );
}
