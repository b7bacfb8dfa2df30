use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::choices::CreditType;
use super::option_fields::OptionField;
use super::rating::Rating;
use super::validation::{default_level, validate_not_blank, validate_optional_url, validate_url};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: Uuid,
    pub task_name: String,
    pub added_on: DateTime<Utc>,
    pub project_id: Uuid,
    pub credits: CreditType,
    pub rating: Rating,
    pub mention: Option<String>,
    pub amount: i32,
    pub task_description: String,
    pub task_link: Option<String>,
    pub latest_submission_time: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub deadline: NaiveDate,
}

#[derive(Debug)]
pub struct TaskInsert {
    pub task_name: String,
    pub project_id: Uuid,
    pub credits: CreditType,
    pub mention: Option<String>,
    pub amount: i32,
    pub task_description: String,
    pub task_link: Option<String>,
    pub latest_submission_time: Option<DateTime<Utc>>,
    pub deadline: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewTask {
    /// Task names are unique across every project.
    #[validate(
        length(min = 1, max = 50, message = "Task name must be between 1 and 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub task_name: String,

    #[serde(default)]
    pub credits: CreditType,

    #[validate(length(max = 200, message = "Mention cannot exceed 200 characters"))]
    pub mention: Option<String>,

    #[serde(default)]
    pub amount: i32,

    #[validate(length(max = 100, message = "Task description cannot exceed 100 characters"))]
    pub task_description: String,

    #[validate(custom(function = "validate_url"))]
    pub task_link: Option<String>,

    pub latest_submission_time: Option<DateTime<Utc>>,

    pub deadline: NaiveDate,
}

impl NewTask {
    pub fn prepare_for_insert(self, project_id: Uuid) -> TaskInsert {
        TaskInsert {
            task_name: self.task_name.trim().to_string(),
            project_id,
            credits: self.credits,
            mention: self.mention,
            amount: self.amount,
            task_description: self.task_description,
            task_link: self.task_link.filter(|link| !link.is_empty()),
            latest_submission_time: self.latest_submission_time,
            deadline: self.deadline,
        }
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateTaskRequest {
    #[validate(
        length(min = 1, max = 50, message = "Task name must be between 1 and 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub task_name: Option<String>,

    pub credits: Option<CreditType>,

    pub rating: Option<Rating>,

    #[validate(length(max = 200, message = "Mention cannot exceed 200 characters"))]
    pub mention: OptionField<String>,

    pub amount: Option<i32>,

    #[validate(length(max = 100, message = "Task description cannot exceed 100 characters"))]
    pub task_description: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub task_link: OptionField<String>,

    pub latest_submission_time: OptionField<DateTime<Utc>>,

    pub is_completed: Option<bool>,

    pub deadline: Option<NaiveDate>,
}

impl UpdateTaskRequest {
    /// `added_on` and `project_id` are never taken from a request.
    pub fn apply(self, mut task: Task) -> Task {
        if let Some(name) = self.task_name {
            task.task_name = name.trim().to_string();
        }
        if let Some(credits) = self.credits {
            task.credits = credits;
        }
        if let Some(rating) = self.rating {
            task.rating = rating;
        }
        task.mention = self.mention.apply_to(task.mention);
        if let Some(amount) = self.amount {
            task.amount = amount;
        }
        if let Some(description) = self.task_description {
            task.task_description = description;
        }
        task.task_link = self.task_link.apply_to(task.task_link);
        task.latest_submission_time = self.latest_submission_time.apply_to(task.latest_submission_time);
        if let Some(is_completed) = self.is_completed {
            task.is_completed = is_completed;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
        task
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TaskSkillRequirement {
    pub id: Uuid,
    pub task_id: Uuid,
    pub skill_id: Uuid,
    pub skill_name: String,
    pub proficiency_level_required: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetSkillRequirement {
    pub skill_id: Uuid,

    #[serde(default = "default_level")]
    #[validate(range(min = 1, message = "Required proficiency must be at least 1"))]
    pub proficiency_level_required: i32,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TaskLanguageRequirement {
    pub id: Uuid,
    pub task_id: Uuid,
    pub language_id: Uuid,
    pub language_name: String,
    pub fluency_level_required: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetLanguageRequirement {
    pub language_id: Uuid,

    #[serde(default = "default_level")]
    #[validate(range(min = 1, message = "Required fluency must be at least 1"))]
    pub fluency_level_required: i32,
}
