use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::rating::UserRating,
    errors::AppError,
    repositories::{sqlx_repo::SqlxRatingRepo, violated_constraint, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn create_rating(&self, rating: &UserRating) -> Result<UserRating, AppError>;
    async fn get_rating(&self, task_id: &Uuid) -> Result<Option<UserRating>, AppError>;
    async fn update_rating(&self, rating: &UserRating) -> Result<UserRating, AppError>;
    async fn delete_rating(&self, task_id: &Uuid) -> Result<(), AppError>;
}

impl SqlxRatingRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxRatingRepo { pool }
    }
}

#[async_trait]
impl RatingRepository for SqlxRatingRepo {
    async fn create_rating(&self, rating: &UserRating) -> Result<UserRating, AppError> {
        sqlx::query_as::<_, UserRating>(
            r#"
            INSERT INTO user_ratings (task_id, employer_id, freelancer_id, employer_rating, freelancer_rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING task_id, employer_id, freelancer_id, employer_rating, freelancer_rating
            "#
        )
        .bind(rating.task_id)
        .bind(rating.employer_id)
        .bind(rating.freelancer_id)
        .bind(&rating.employer_rating)
        .bind(&rating.freelancer_rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violated_constraint(&e, UNIQUE_VIOLATION).is_some() {
                AppError::Conflict("Task has already been rated".to_string())
            } else if violated_constraint(&e, FOREIGN_KEY_VIOLATION).is_some() {
                AppError::NotFound("Task or profile not found".to_string())
            } else {
                AppError::from(e)
            }
        })
    }

    async fn get_rating(&self, task_id: &Uuid) -> Result<Option<UserRating>, AppError> {
        sqlx::query_as::<_, UserRating>(
            r#"
            SELECT task_id, employer_id, freelancer_id, employer_rating, freelancer_rating
            FROM user_ratings
            WHERE task_id = $1
            "#
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update_rating(&self, rating: &UserRating) -> Result<UserRating, AppError> {
        sqlx::query_as::<_, UserRating>(
            r#"
            UPDATE user_ratings
            SET employer_rating = $2, freelancer_rating = $3
            WHERE task_id = $1
            RETURNING task_id, employer_id, freelancer_id, employer_rating, freelancer_rating
            "#
        )
        .bind(rating.task_id)
        .bind(&rating.employer_rating)
        .bind(&rating.freelancer_rating)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Rating not found".to_string()))
    }

    async fn delete_rating(&self, task_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM user_ratings WHERE task_id = $1")
            .bind(task_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Rating not found".to_string()));
        }

        Ok(())
    }
}
