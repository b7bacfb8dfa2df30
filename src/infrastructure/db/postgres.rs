use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};
use std::time::Duration;

const CONNECT_ATTEMPTS: u32 = 6;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connects with exponential backoff (2s, 4s, 8s, ...) so the service can start
/// before the database is accepting connections.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let options = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT);

    let mut backoff = Duration::from_secs(2);
    for attempt in 1..CONNECT_ATTEMPTS {
        match options.clone().connect(database_url).await {
            Ok(pool) => {
                info!(max_connections, "Database connection established.");
                return Ok(pool);
            }
            Err(e) => {
                warn!(
                    "Failed to connect to database (attempt {}/{}): {}. Retrying in {}s...",
                    attempt, CONNECT_ATTEMPTS, e, backoff.as_secs()
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
        }
    }

    options.connect(database_url).await
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied.");
    Ok(())
}
