use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::engagement::{Applicant, Contributor},
    errors::AppError,
    repositories::{sqlx_repo::SqlxEngagementRepo, violated_constraint, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
};

/// Applications to tasks and the contributors selected for them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    async fn create_applicant(&self, task_id: &Uuid, profile_id: &Uuid) -> Result<Applicant, AppError>;
    async fn list_applicants_for_task(&self, task_id: &Uuid) -> Result<Vec<Applicant>, AppError>;
    async fn list_applications_for_profile(&self, profile_id: &Uuid) -> Result<Vec<Applicant>, AppError>;
    async fn delete_applicant(&self, task_id: &Uuid, profile_id: &Uuid) -> Result<(), AppError>;

    async fn create_contributor(&self, task_id: &Uuid, profile_id: &Uuid) -> Result<Contributor, AppError>;
    async fn list_contributors_for_task(&self, task_id: &Uuid) -> Result<Vec<Contributor>, AppError>;
    async fn set_credit_verified(&self, task_id: &Uuid, profile_id: &Uuid, verified: bool) -> Result<Contributor, AppError>;
    async fn delete_contributor(&self, task_id: &Uuid, profile_id: &Uuid) -> Result<(), AppError>;
}

impl SqlxEngagementRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEngagementRepo { pool }
    }
}

fn map_engagement_error(err: sqlx::Error, duplicate: &str) -> AppError {
    if violated_constraint(&err, UNIQUE_VIOLATION).is_some() {
        AppError::Conflict(duplicate.to_string())
    } else if violated_constraint(&err, FOREIGN_KEY_VIOLATION).is_some() {
        AppError::NotFound("Task or profile not found".to_string())
    } else {
        AppError::from(err)
    }
}

#[async_trait]
impl EngagementRepository for SqlxEngagementRepo {
    async fn create_applicant(&self, task_id: &Uuid, profile_id: &Uuid) -> Result<Applicant, AppError> {
        sqlx::query_as::<_, Applicant>(
            r#"
            INSERT INTO applicants (task_id, profile_id)
            VALUES ($1, $2)
            RETURNING id, profile_id, task_id, applied_at
            "#
        )
        .bind(task_id)
        .bind(profile_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_engagement_error(e, "Profile has already applied to this task"))
    }

    async fn list_applicants_for_task(&self, task_id: &Uuid) -> Result<Vec<Applicant>, AppError> {
        let applicants = sqlx::query_as::<_, Applicant>(
            "SELECT id, profile_id, task_id, applied_at FROM applicants WHERE task_id = $1 ORDER BY applied_at"
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applicants)
    }

    async fn list_applications_for_profile(&self, profile_id: &Uuid) -> Result<Vec<Applicant>, AppError> {
        let applications = sqlx::query_as::<_, Applicant>(
            "SELECT id, profile_id, task_id, applied_at FROM applicants WHERE profile_id = $1 ORDER BY applied_at DESC"
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    async fn delete_applicant(&self, task_id: &Uuid, profile_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM applicants WHERE task_id = $1 AND profile_id = $2")
            .bind(task_id)
            .bind(profile_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Application not found".to_string()));
        }

        Ok(())
    }

    async fn create_contributor(&self, task_id: &Uuid, profile_id: &Uuid) -> Result<Contributor, AppError> {
        sqlx::query_as::<_, Contributor>(
            r#"
            INSERT INTO contributors (task_id, profile_id)
            VALUES ($1, $2)
            RETURNING id, profile_id, task_id, is_credit_verified, selected_at
            "#
        )
        .bind(task_id)
        .bind(profile_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_engagement_error(e, "Profile is already a contributor on this task"))
    }

    async fn list_contributors_for_task(&self, task_id: &Uuid) -> Result<Vec<Contributor>, AppError> {
        let contributors = sqlx::query_as::<_, Contributor>(
            r#"
            SELECT id, profile_id, task_id, is_credit_verified, selected_at
            FROM contributors
            WHERE task_id = $1
            ORDER BY selected_at
            "#
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(contributors)
    }

    async fn set_credit_verified(&self, task_id: &Uuid, profile_id: &Uuid, verified: bool) -> Result<Contributor, AppError> {
        sqlx::query_as::<_, Contributor>(
            r#"
            UPDATE contributors
            SET is_credit_verified = $3
            WHERE task_id = $1 AND profile_id = $2
            RETURNING id, profile_id, task_id, is_credit_verified, selected_at
            "#
        )
        .bind(task_id)
        .bind(profile_id)
        .bind(verified)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Contributor not found".to_string()))
    }

    async fn delete_contributor(&self, task_id: &Uuid, profile_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contributors WHERE task_id = $1 AND profile_id = $2")
            .bind(task_id)
            .bind(profile_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Contributor not found".to_string()));
        }

        Ok(())
    }
}
