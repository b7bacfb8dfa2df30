use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::{default_level, validate_not_blank};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub skill_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewSkill {
    #[validate(
        length(min = 1, max = 50, message = "Skill name must be between 1 and 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub skill_name: String,
}

/// A skill held by a profile.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProfileSkill {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub skill_id: Uuid,
    pub skill_name: String,
    pub level_of_proficiency: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetProfileSkill {
    pub skill_id: Uuid,

    #[serde(default = "default_level")]
    #[validate(range(min = 1, message = "Proficiency level must be at least 1"))]
    pub level_of_proficiency: i32,
}
