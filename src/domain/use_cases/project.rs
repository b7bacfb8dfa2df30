use validator::Validate;

use crate::entities::project::{NewProject, Project, ProjectQuery, UpdateProjectRequest};
use crate::errors::AppError;
use crate::repositories::project::ProjectRepository;
use crate::utils::valid_uuid::valid_uuid;

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    pub async fn create_project(&self, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;

        let project = self.project_repo.create_project(&request).await?;
        tracing::info!(project_id = %project.id, leader_id = %project.leader_id, "Project created");

        Ok(project)
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.get_project(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn list_projects(&self, query: ProjectQuery) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(&query).await
    }

    pub async fn update_project(&self, id: &str, request: UpdateProjectRequest) -> Result<Project, AppError> {
        request.validate()?;

        let current = self.get_project(id).await?;
        self.project_repo.update_project(&request.apply(current)).await
    }

    /// Deleting a project cascades to its tasks and everything attached to them.
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.delete_project(&valid_id).await?;
        tracing::info!(project_id = %valid_id, "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::repositories::project::MockProjectRepository;

    fn stored(id: Uuid) -> Project {
        Project {
            id,
            project_name: "Campus Map".into(),
            description: "Interactive campus map".into(),
            posted_on: Utc::now(),
            leader_id: Uuid::new_v4(),
            is_completed: false,
            deadline: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            task_count: 3,
        }
    }

    #[tokio::test]
    async fn update_preserves_counter_and_posting_time() {
        let id = Uuid::new_v4();
        let original = stored(id);
        let posted_on = original.posted_on;

        let mut repo = MockProjectRepository::new();
        repo.expect_get_project().returning(move |_| Ok(Some(original.clone())));
        repo.expect_update_project()
            .withf(move |p| p.is_completed && p.task_count == 3 && p.posted_on == posted_on)
            .returning(|p| Ok(p.clone()));

        let handler = ProjectHandler::new(repo);
        let request: UpdateProjectRequest = serde_json::from_str(r#"{"is_completed": true}"#).unwrap();
        let updated = handler.update_project(&id.to_string(), request).await.unwrap();
        assert!(updated.is_completed);
    }

    #[tokio::test]
    async fn overlong_description_is_rejected() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create_project().never();

        let handler = ProjectHandler::new(repo);
        let request = NewProject {
            project_name: "Campus Map".into(),
            description: "d".repeat(301),
            leader_id: Uuid::new_v4(),
            deadline: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
        };
        let err = handler.create_project(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_project().returning(|_| Ok(None));

        let handler = ProjectHandler::new(repo);
        let err = handler.get_project(&Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
