use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::{default_level, validate_not_blank};

/// Spoken or communication language.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Language {
    pub id: Uuid,
    pub language_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewLanguage {
    #[validate(
        length(min = 1, max = 30, message = "Language name must be between 1 and 30 characters"),
        custom(function = "validate_not_blank")
    )]
    pub language_name: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProfileLanguage {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub language_id: Uuid,
    pub language_name: String,
    pub level_of_fluency: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetProfileLanguage {
    pub language_id: Uuid,

    #[serde(default = "default_level")]
    #[validate(range(min = 1, message = "Fluency level must be at least 1"))]
    pub level_of_fluency: i32,
}
