use chrono::{DateTime, Utc, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub project_name: String,
    pub description: String,
    pub posted_on: DateTime<Utc>,
    pub leader_id: Uuid,
    pub is_completed: bool,
    pub deadline: NaiveDate,
    /// Number of tasks in the project, kept in step with task inserts and deletes.
    pub task_count: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProject {
    #[validate(
        length(min = 1, max = 100, message = "Project name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub project_name: String,

    #[validate(length(max = 300, message = "Description cannot exceed 300 characters"))]
    pub description: String,

    pub leader_id: Uuid,

    pub deadline: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateProjectRequest {
    #[validate(
        length(min = 1, max = 100, message = "Project name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub project_name: Option<String>,

    #[validate(length(max = 300, message = "Description cannot exceed 300 characters"))]
    pub description: Option<String>,

    pub is_completed: Option<bool>,

    pub deadline: Option<NaiveDate>,
}

impl UpdateProjectRequest {
    /// `posted_on`, `leader_id` and `task_count` are never taken from a request.
    pub fn apply(self, mut project: Project) -> Project {
        if let Some(name) = self.project_name {
            project.project_name = name;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(is_completed) = self.is_completed {
            project.is_completed = is_completed;
        }
        if let Some(deadline) = self.deadline {
            project.deadline = deadline;
        }
        project
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ProjectQuery {
    pub leader_id: Option<Uuid>,
    pub is_completed: Option<bool>,
}
