use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A profile's request to work on a task.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Applicant {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub task_id: Uuid,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewApplication {
    pub profile_id: Uuid,
}

/// A profile selected to work on a task.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Contributor {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub task_id: Uuid,
    pub is_credit_verified: bool,
    pub selected_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewContributor {
    pub profile_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreditVerification {
    pub is_credit_verified: bool,
}
