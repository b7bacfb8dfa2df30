use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::project::{NewProject, Project, ProjectQuery},
    errors::AppError,
    repositories::{sqlx_repo::SqlxProjectRepo, violated_constraint, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
};

const PROJECT_COLUMNS: &str =
    "id, project_name, description, posted_on, leader_id, is_completed, deadline, task_count";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;
    async fn get_project(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, AppError>;
    async fn update_project(&self, project: &Project) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

fn map_project_error(err: sqlx::Error) -> AppError {
    if violated_constraint(&err, UNIQUE_VIOLATION).is_some() {
        AppError::Conflict("A project with this name already exists".to_string())
    } else if violated_constraint(&err, FOREIGN_KEY_VIOLATION).is_some() {
        AppError::NotFound("Leader profile not found".to_string())
    } else {
        AppError::from(err)
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            r#"
            INSERT INTO projects (project_name, description, leader_id, deadline)
            VALUES ($1, $2, $3, $4)
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(project.project_name.trim())
        .bind(&project.description)
        .bind(project.leader_id)
        .bind(project.deadline)
        .fetch_one(&self.pool)
        .await
        .map_err(map_project_error)
    }

    async fn get_project(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(&format!(
            r#"
            SELECT {PROJECT_COLUMNS}
            FROM projects
            WHERE ($1::uuid IS NULL OR leader_id = $1)
              AND ($2::boolean IS NULL OR is_completed = $2)
            ORDER BY posted_on DESC
            "#
        ))
        .bind(query.leader_id)
        .bind(query.is_completed)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn update_project(&self, project: &Project) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            r#"
            UPDATE projects
            SET project_name = $2,
                description = $3,
                is_completed = $4,
                deadline = $5
            WHERE id = $1
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(project.id)
        .bind(project.project_name.trim())
        .bind(&project.description)
        .bind(project.is_completed)
        .bind(project.deadline)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_project_error)?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        Ok(())
    }
}
