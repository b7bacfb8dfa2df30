use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::choices::{BatchYear, Gender};
use super::option_fields::OptionField;
use super::validation::{validate_optional_phone_number, validate_phone_number};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub user_id: Uuid,
    pub phone_number: Option<String>,
    pub bio: String,
    pub image_path: Option<String>,
    pub batch_year: BatchYear,
    pub gender: Gender,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProfile {
    pub user_id: Uuid,

    #[validate(
        length(max = 11, message = "Phone number cannot exceed 11 characters"),
        custom(function = "validate_phone_number")
    )]
    pub phone_number: Option<String>,

    #[serde(default)]
    #[validate(length(max = 500, message = "Bio cannot exceed 500 characters"))]
    pub bio: String,

    #[serde(default)]
    pub batch_year: BatchYear,

    #[serde(default)]
    pub gender: Gender,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateProfileRequest {
    #[validate(
        length(max = 11, message = "Phone number cannot exceed 11 characters"),
        custom(function = "validate_optional_phone_number")
    )]
    pub phone_number: OptionField<String>,

    #[validate(length(max = 500, message = "Bio cannot exceed 500 characters"))]
    pub bio: Option<String>,

    pub batch_year: Option<BatchYear>,

    pub gender: Option<Gender>,
}

impl UpdateProfileRequest {
    pub fn apply(self, mut profile: Profile) -> Profile {
        profile.phone_number = self.phone_number.apply_to(profile.phone_number);
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        if let Some(batch_year) = self.batch_year {
            profile.batch_year = batch_year;
        }
        if let Some(gender) = self.gender {
            profile.gender = gender;
        }
        profile
    }
}

#[derive(Debug, MultipartForm)]
pub struct ProfileImageUpload {
    #[multipart(rename = "image", limit = "5MB")]
    pub image: TempFile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Profile {
        Profile {
            user_id: Uuid::new_v4(),
            phone_number: Some("08012345678".into()),
            bio: "old bio".into(),
            image_path: None,
            batch_year: BatchYear::Ug1,
            gender: Gender::Female,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn update_only_touches_supplied_fields() {
        let patch: UpdateProfileRequest =
            serde_json::from_str(r#"{"bio": "new bio", "batch_year": "UG-2"}"#).unwrap();
        let updated = patch.apply(stored());

        assert_eq!(updated.bio, "new bio");
        assert_eq!(updated.batch_year, BatchYear::Ug2);
        assert_eq!(updated.gender, Gender::Female);
        assert_eq!(updated.phone_number.as_deref(), Some("08012345678"));
    }

    #[test]
    fn explicit_null_clears_phone_number() {
        let patch: UpdateProfileRequest = serde_json::from_str(r#"{"phone_number": null}"#).unwrap();
        assert_eq!(patch.apply(stored()).phone_number, None);
    }

    #[test]
    fn rejects_overlong_bio_and_phone() {
        let patch = UpdateProfileRequest {
            bio: Some("x".repeat(501)),
            ..Default::default()
        };
        assert!(patch.validate().is_err());

        let patch = UpdateProfileRequest {
            phone_number: OptionField::SetToValue("123456789012".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
