use actix_web::web;

use crate::handlers::notifications;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notifications")
            .service(
                web::resource("")
                    .route(web::post().to(notifications::send_notification))
            )
            .service(
                web::resource("/{notification_id}")
                    .route(web::get().to(notifications::get_notification))
                    .route(web::delete().to(notifications::delete_notification))
            )
            .service(
                web::resource("/{notification_id}/read")
                    .route(web::post().to(notifications::mark_read))
            )
    );
}
