use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::user::{User, UserInsert, EMAIL_TAKEN, USERNAME_TAKEN},
    errors::AppError,
    repositories::{sqlx_repo::SqlxUserRepo, violated_constraint, UNIQUE_VIOLATION},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn username_exists(&self, username: &str) -> Result<bool, AppError>;
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;
    /// Inserts the credential record together with its profile.
    async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError>;
    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
    /// Deletes the account and everything hanging off it, returning the profile image key if any.
    async fn delete_user(&self, id: &Uuid) -> Result<Option<String>, AppError>;
}

impl SqlxUserRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxUserRepo { pool }
    }
}

/// Maps a unique violation on `users` to the matching signup rejection.
fn map_user_conflict(err: sqlx::Error) -> AppError {
    match violated_constraint(&err, UNIQUE_VIOLATION).as_deref() {
        Some("users_username_key") => AppError::Conflict(USERNAME_TAKEN.to_string()),
        Some("users_email_key") => AppError::Conflict(EMAIL_TAKEN.to_string()),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)"
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_user_conflict)?;

        sqlx::query("INSERT INTO profiles (user_id, bio) VALUES ($1, $2)")
            .bind(id)
            .bind(&user.bio)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(id)
    }

    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn delete_user(&self, id: &Uuid) -> Result<Option<String>, AppError> {
        let deleted: Option<Option<String>> = sqlx::query_scalar(
            r#"
            WITH doomed AS (
                SELECT image_path FROM profiles WHERE user_id = $1
            )
            DELETE FROM users
            WHERE id = $1
            RETURNING (SELECT image_path FROM doomed)
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        deleted.ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
