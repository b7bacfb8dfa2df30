use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::profile::{NewProfile, Profile},
    errors::AppError,
    repositories::{sqlx_repo::SqlxProfileRepo, violated_constraint, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
};

const PROFILE_COLUMNS: &str =
    "user_id, phone_number, bio, image_path, batch_year, gender, updated_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create_profile(&self, profile: &NewProfile) -> Result<Profile, AppError>;
    async fn get_profile(&self, user_id: &Uuid) -> Result<Option<Profile>, AppError>;
    async fn update_profile(&self, profile: &Profile) -> Result<Profile, AppError>;
    /// Points the profile at a new image key, returning the key it replaced.
    async fn set_profile_image(&self, user_id: &Uuid, image_path: Option<String>) -> Result<Option<String>, AppError>;
    /// Deletes the profile, returning its image key if it had one.
    async fn delete_profile(&self, user_id: &Uuid) -> Result<Option<String>, AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn create_profile(&self, profile: &NewProfile) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(&format!(
            r#"
            INSERT INTO profiles (user_id, phone_number, bio, batch_year, gender)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(profile.user_id)
        .bind(&profile.phone_number)
        .bind(&profile.bio)
        .bind(profile.batch_year)
        .bind(profile.gender)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violated_constraint(&e, UNIQUE_VIOLATION).is_some() {
                AppError::Conflict("Profile already exists for this account".to_string())
            } else if violated_constraint(&e, FOREIGN_KEY_VIOLATION).is_some() {
                AppError::NotFound("Account not found".to_string())
            } else {
                AppError::from(e)
            }
        })
    }

    async fn get_profile(&self, user_id: &Uuid) -> Result<Option<Profile>, AppError> {
        sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update_profile(&self, profile: &Profile) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(&format!(
            r#"
            UPDATE profiles
            SET phone_number = $2,
                bio = $3,
                batch_year = $4,
                gender = $5,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(profile.user_id)
        .bind(&profile.phone_number)
        .bind(&profile.bio)
        .bind(profile.batch_year)
        .bind(profile.gender)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    async fn set_profile_image(&self, user_id: &Uuid, image_path: Option<String>) -> Result<Option<String>, AppError> {
        let previous: Option<Option<String>> = sqlx::query_scalar(
            r#"
            UPDATE profiles AS p
            SET image_path = $2, updated_at = NOW()
            FROM (SELECT user_id, image_path FROM profiles WHERE user_id = $1 FOR UPDATE) AS old
            WHERE p.user_id = old.user_id
            RETURNING old.image_path
            "#
        )
        .bind(user_id)
        .bind(image_path)
        .fetch_optional(&self.pool)
        .await?;

        previous.ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    async fn delete_profile(&self, user_id: &Uuid) -> Result<Option<String>, AppError> {
        let deleted: Option<Option<String>> = sqlx::query_scalar(
            "DELETE FROM profiles WHERE user_id = $1 RETURNING image_path"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        deleted.ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }
}
