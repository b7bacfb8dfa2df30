use actix_web::web;

use crate::handlers::home::home;
use crate::settings::AppConfig;

mod admin;
mod auth;
mod catalog;
mod json_error;
mod notifications;
mod profiles;
mod projects;
mod tasks;
mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    cfg.service(home);

    cfg.configure(auth::config_routes);
    cfg.configure(admin::config_routes);

    cfg.service(
        web::scope("/api")
            .configure(users::config_routes)
            .configure(profiles::config_routes)
            .configure(catalog::config_routes)
            .configure(projects::config_routes)
            .configure(tasks::config_routes)
            .configure(notifications::config_routes)
    );

    cfg.configure(|cfg| json_error::config_routes(cfg, config.max_image_bytes));
}
