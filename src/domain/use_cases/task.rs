use validator::Validate;

use crate::entities::task::{
    NewTask, SetLanguageRequirement, SetSkillRequirement, Task, TaskLanguageRequirement,
    TaskSkillRequirement, UpdateTaskRequest,
};
use crate::errors::AppError;
use crate::repositories::task::TaskRepository;
use crate::utils::valid_uuid::valid_uuid;

pub struct TaskHandler<R>
where
    R: TaskRepository,
{
    pub task_repo: R,
}

impl<R> TaskHandler<R>
where
    R: TaskRepository,
{
    pub fn new(task_repo: R) -> Self {
        TaskHandler { task_repo }
    }

    pub async fn create_task(&self, project_id: &str, request: NewTask) -> Result<Task, AppError> {
        let project_id = valid_uuid(project_id)?;
        request.validate()?;

        let task = self.task_repo.create_task(&request.prepare_for_insert(project_id)).await?;
        tracing::info!(task_id = %task.id, %project_id, "Task created");

        Ok(task)
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, AppError> {
        let valid_id = valid_uuid(id)?;
        self.task_repo.get_task(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    pub async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, AppError> {
        let project_id = valid_uuid(project_id)?;
        self.task_repo.list_tasks_for_project(&project_id).await
    }

    pub async fn update_task(&self, id: &str, request: UpdateTaskRequest) -> Result<Task, AppError> {
        request.validate()?;

        let current = self.get_task(id).await?;
        self.task_repo.update_task(&request.apply(current)).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.task_repo.delete_task(&valid_id).await?;
        tracing::info!(task_id = %valid_id, "Task deleted");
        Ok(())
    }

    pub async fn set_skill_requirement(&self, task_id: &str, request: SetSkillRequirement) -> Result<TaskSkillRequirement, AppError> {
        let task_id = valid_uuid(task_id)?;
        request.validate()?;
        self.task_repo.set_skill_requirement(&task_id, &request).await
    }

    pub async fn list_skill_requirements(&self, task_id: &str) -> Result<Vec<TaskSkillRequirement>, AppError> {
        let task_id = valid_uuid(task_id)?;
        self.task_repo.list_skill_requirements(&task_id).await
    }

    pub async fn remove_skill_requirement(&self, task_id: &str, skill_id: &str) -> Result<(), AppError> {
        let task_id = valid_uuid(task_id)?;
        let skill_id = valid_uuid(skill_id)?;
        self.task_repo.remove_skill_requirement(&task_id, &skill_id).await
    }

    pub async fn set_language_requirement(&self, task_id: &str, request: SetLanguageRequirement) -> Result<TaskLanguageRequirement, AppError> {
        let task_id = valid_uuid(task_id)?;
        request.validate()?;
        self.task_repo.set_language_requirement(&task_id, &request).await
    }

    pub async fn list_language_requirements(&self, task_id: &str) -> Result<Vec<TaskLanguageRequirement>, AppError> {
        let task_id = valid_uuid(task_id)?;
        self.task_repo.list_language_requirements(&task_id).await
    }

    pub async fn remove_language_requirement(&self, task_id: &str, language_id: &str) -> Result<(), AppError> {
        let task_id = valid_uuid(task_id)?;
        let language_id = valid_uuid(language_id)?;
        self.task_repo.remove_language_requirement(&task_id, &language_id).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::repositories::task::MockTaskRepository;

    fn new_task(name: &str) -> NewTask {
        serde_json::from_value(serde_json::json!({
            "task_name": name,
            "task_description": "Draw the wireframes",
            "deadline": "2026-11-30",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_binds_task_to_project_and_trims_name() {
        let project_id = Uuid::new_v4();
        let mut repo = MockTaskRepository::new();
        repo.expect_create_task()
            .withf(move |t| t.project_id == project_id && t.task_name == "Wireframes")
            .times(1)
            .returning(|_| Err(AppError::NotFound("Project not found".into())));

        let handler = TaskHandler::new(repo);
        let err = handler
            .create_task(&project_id.to_string(), new_task(" Wireframes "))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_link_is_rejected_before_insert() {
        let mut repo = MockTaskRepository::new();
        repo.expect_create_task().never();

        let mut request = new_task("Wireframes");
        request.task_link = Some("not a url".into());

        let handler = TaskHandler::new(repo);
        let err = handler.create_task(&Uuid::new_v4().to_string(), request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn requirement_levels_below_one_are_rejected() {
        let mut repo = MockTaskRepository::new();
        repo.expect_set_language_requirement().never();

        let handler = TaskHandler::new(repo);
        let request = SetLanguageRequirement { language_id: Uuid::new_v4(), fluency_level_required: 0 };
        let err = handler
            .set_language_requirement(&Uuid::new_v4().to_string(), request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
