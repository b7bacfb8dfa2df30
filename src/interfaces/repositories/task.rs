use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::task::{
        SetLanguageRequirement, SetSkillRequirement, Task, TaskInsert, TaskLanguageRequirement,
        TaskSkillRequirement,
    },
    errors::AppError,
    repositories::{sqlx_repo::SqlxTaskRepo, violated_constraint, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
};

const TASK_COLUMNS: &str = "id, task_name, added_on, project_id, credits, rating, mention, amount, \
    task_description, task_link, latest_submission_time, is_completed, deadline";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts the task and bumps its project's `task_count` in one transaction.
    async fn create_task(&self, task: &TaskInsert) -> Result<Task, AppError>;
    async fn get_task(&self, id: &Uuid) -> Result<Option<Task>, AppError>;
    async fn list_tasks_for_project(&self, project_id: &Uuid) -> Result<Vec<Task>, AppError>;
    async fn update_task(&self, task: &Task) -> Result<Task, AppError>;
    /// Deletes the task and decrements its project's `task_count` in one transaction.
    async fn delete_task(&self, id: &Uuid) -> Result<(), AppError>;

    async fn set_skill_requirement(&self, task_id: &Uuid, request: &SetSkillRequirement) -> Result<TaskSkillRequirement, AppError>;
    async fn list_skill_requirements(&self, task_id: &Uuid) -> Result<Vec<TaskSkillRequirement>, AppError>;
    async fn remove_skill_requirement(&self, task_id: &Uuid, skill_id: &Uuid) -> Result<(), AppError>;

    async fn set_language_requirement(&self, task_id: &Uuid, request: &SetLanguageRequirement) -> Result<TaskLanguageRequirement, AppError>;
    async fn list_language_requirements(&self, task_id: &Uuid) -> Result<Vec<TaskLanguageRequirement>, AppError>;
    async fn remove_language_requirement(&self, task_id: &Uuid, language_id: &Uuid) -> Result<(), AppError>;
}

impl SqlxTaskRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxTaskRepo { pool }
    }
}

fn map_task_error(err: sqlx::Error) -> AppError {
    if violated_constraint(&err, UNIQUE_VIOLATION).is_some() {
        AppError::Conflict("A task with this name already exists".to_string())
    } else {
        AppError::from(err)
    }
}

fn map_requirement_error(err: sqlx::Error) -> AppError {
    if violated_constraint(&err, FOREIGN_KEY_VIOLATION).is_some() {
        AppError::NotFound("Task or referenced entry not found".to_string())
    } else {
        AppError::from(err)
    }
}

#[async_trait]
impl TaskRepository for SqlxTaskRepo {
    async fn create_task(&self, task: &TaskInsert) -> Result<Task, AppError> {
        let mut tx = self.pool.begin().await?;

        // Row lock serialises counter updates for the project.
        let project: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM projects WHERE id = $1 FOR UPDATE"
        )
        .bind(task.project_id)
        .fetch_optional(&mut *tx)
        .await?;

        if project.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let created = sqlx::query_as::<_, Task>(&format!(
            r#"
            INSERT INTO tasks (
                task_name, project_id, credits, mention, amount,
                task_description, task_link, latest_submission_time, deadline
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(&task.task_name)
        .bind(task.project_id)
        .bind(task.credits)
        .bind(&task.mention)
        .bind(task.amount)
        .bind(&task.task_description)
        .bind(&task.task_link)
        .bind(task.latest_submission_time)
        .bind(task.deadline)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_task_error)?;

        sqlx::query("UPDATE projects SET task_count = task_count + 1 WHERE id = $1")
            .bind(task.project_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_task(&self, id: &Uuid) -> Result<Option<Task>, AppError> {
        sqlx::query_as::<_, Task>(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn list_tasks_for_project(&self, project_id: &Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY added_on"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update_task(&self, task: &Task) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(&format!(
            r#"
            UPDATE tasks
            SET task_name = $2,
                credits = $3,
                rating = $4,
                mention = $5,
                amount = $6,
                task_description = $7,
                task_link = $8,
                latest_submission_time = $9,
                is_completed = $10,
                deadline = $11
            WHERE id = $1
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(task.id)
        .bind(&task.task_name)
        .bind(task.credits)
        .bind(&task.rating)
        .bind(&task.mention)
        .bind(task.amount)
        .bind(&task.task_description)
        .bind(&task.task_link)
        .bind(task.latest_submission_time)
        .bind(task.is_completed)
        .bind(task.deadline)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_task_error)?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    async fn delete_task(&self, id: &Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let project_id: Option<Uuid> = sqlx::query_scalar(
            "DELETE FROM tasks WHERE id = $1 RETURNING project_id"
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(project_id) = project_id else {
            return Err(AppError::NotFound("Task not found".to_string()));
        };

        sqlx::query("UPDATE projects SET task_count = task_count - 1 WHERE id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn set_skill_requirement(&self, task_id: &Uuid, request: &SetSkillRequirement) -> Result<TaskSkillRequirement, AppError> {
        sqlx::query_as::<_, TaskSkillRequirement>(
            r#"
            WITH upserted AS (
                INSERT INTO task_skill_requirements (task_id, skill_id, proficiency_level_required)
                VALUES ($1, $2, $3)
                ON CONFLICT (task_id, skill_id)
                DO UPDATE SET proficiency_level_required = EXCLUDED.proficiency_level_required
                RETURNING id, task_id, skill_id, proficiency_level_required
            )
            SELECT u.id, u.task_id, u.skill_id, s.skill_name, u.proficiency_level_required
            FROM upserted u
            JOIN skills s ON s.id = u.skill_id
            "#
        )
        .bind(task_id)
        .bind(request.skill_id)
        .bind(request.proficiency_level_required)
        .fetch_one(&self.pool)
        .await
        .map_err(map_requirement_error)
    }

    async fn list_skill_requirements(&self, task_id: &Uuid) -> Result<Vec<TaskSkillRequirement>, AppError> {
        let requirements = sqlx::query_as::<_, TaskSkillRequirement>(
            r#"
            SELECT r.id, r.task_id, r.skill_id, s.skill_name, r.proficiency_level_required
            FROM task_skill_requirements r
            JOIN skills s ON s.id = r.skill_id
            WHERE r.task_id = $1
            ORDER BY s.skill_name
            "#
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requirements)
    }

    async fn remove_skill_requirement(&self, task_id: &Uuid, skill_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM task_skill_requirements WHERE task_id = $1 AND skill_id = $2")
            .bind(task_id)
            .bind(skill_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill requirement not found".to_string()));
        }

        Ok(())
    }

    async fn set_language_requirement(&self, task_id: &Uuid, request: &SetLanguageRequirement) -> Result<TaskLanguageRequirement, AppError> {
        sqlx::query_as::<_, TaskLanguageRequirement>(
            r#"
            WITH upserted AS (
                INSERT INTO task_language_requirements (task_id, language_id, fluency_level_required)
                VALUES ($1, $2, $3)
                ON CONFLICT (task_id, language_id)
                DO UPDATE SET fluency_level_required = EXCLUDED.fluency_level_required
                RETURNING id, task_id, language_id, fluency_level_required
            )
            SELECT u.id, u.task_id, u.language_id, l.language_name, u.fluency_level_required
            FROM upserted u
            JOIN languages l ON l.id = u.language_id
            "#
        )
        .bind(task_id)
        .bind(request.language_id)
        .bind(request.fluency_level_required)
        .fetch_one(&self.pool)
        .await
        .map_err(map_requirement_error)
    }

    async fn list_language_requirements(&self, task_id: &Uuid) -> Result<Vec<TaskLanguageRequirement>, AppError> {
        let requirements = sqlx::query_as::<_, TaskLanguageRequirement>(
            r#"
            SELECT r.id, r.task_id, r.language_id, l.language_name, r.fluency_level_required
            FROM task_language_requirements r
            JOIN languages l ON l.id = r.language_id
            WHERE r.task_id = $1
            ORDER BY l.language_name
            "#
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requirements)
    }

    async fn remove_language_requirement(&self, task_id: &Uuid, language_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM task_language_requirements WHERE task_id = $1 AND language_id = $2")
            .bind(task_id)
            .bind(language_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Language requirement not found".to_string()));
        }

        Ok(())
    }
}
