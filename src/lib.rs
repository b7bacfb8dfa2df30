mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{auth, db, storage, utils};

use repositories::sqlx_repo::{
    SqlxCatalogRepo, SqlxEngagementRepo, SqlxNotificationRepo, SqlxProfileRepo, SqlxProjectRepo,
    SqlxRatingRepo, SqlxTaskRepo, SqlxUserRepo,
};
use storage::LocalMediaStorage;
use use_cases::{
    auth::AccountHandler, catalog::CatalogHandler, engagement::EngagementHandler,
    notification::NotificationHandler, profile::ProfileHandler, project::ProjectHandler,
    rating::RatingHandler, task::TaskHandler,
};

pub struct AppState {
    pub account_handler: AppAccountHandler,
    pub profile_handler: AppProfileHandler,
    pub catalog_handler: AppCatalogHandler,
    pub project_handler: AppProjectHandler,
    pub task_handler: AppTaskHandler,
    pub engagement_handler: AppEngagementHandler,
    pub rating_handler: AppRatingHandler,
    pub notification_handler: AppNotificationHandler,
    pub trust_forwarded_for: bool,
}

pub type AppAccountHandler = AccountHandler<SqlxUserRepo, LocalMediaStorage>;
pub type AppProfileHandler = ProfileHandler<SqlxProfileRepo, LocalMediaStorage>;
pub type AppCatalogHandler = CatalogHandler<SqlxCatalogRepo>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppTaskHandler = TaskHandler<SqlxTaskRepo>;
pub type AppEngagementHandler = EngagementHandler<SqlxEngagementRepo>;
pub type AppRatingHandler = RatingHandler<SqlxRatingRepo>;
pub type AppNotificationHandler = NotificationHandler<SqlxNotificationRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let storage = LocalMediaStorage::new(&config.media_root);

        AppState {
            account_handler: AccountHandler::new(SqlxUserRepo::new(pool.clone()), storage.clone()),
            profile_handler: ProfileHandler::new(
                SqlxProfileRepo::new(pool.clone()),
                storage,
                config.max_image_bytes,
            ),
            catalog_handler: CatalogHandler::new(SqlxCatalogRepo::new(pool.clone())),
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool.clone())),
            task_handler: TaskHandler::new(SqlxTaskRepo::new(pool.clone())),
            engagement_handler: EngagementHandler::new(SqlxEngagementRepo::new(pool.clone())),
            rating_handler: RatingHandler::new(SqlxRatingRepo::new(pool.clone())),
            notification_handler: NotificationHandler::new(SqlxNotificationRepo::new(pool)),
            trust_forwarded_for: config.trust_forwarded_for,
        }
    }
}
