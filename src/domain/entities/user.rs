use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;
use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::validation::validate_not_blank;

pub const USERNAME_TAKEN: &str = "Username already exists!";
pub const EMAIL_TAKEN: &str = "Email already exists!";

/// Credential record backing a Profile.
#[derive(Debug, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserInsert {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: String,
}

/// Signup form as posted by the registration page.
#[derive(Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct SignupForm {
    #[validate(
        length(min = 1, max = 150, message = "Username must be between 1 and 150 characters"),
        custom(function = "validate_not_blank", message = "Username cannot be blank")
    )]
    pub username: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub passwd1: String,

    pub passwd2: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Bio cannot exceed 500 characters"))]
    pub bio: String,
}

impl SignupForm {
    pub fn passwords_match(&self) -> bool {
        self.passwd1 == self.passwd2
    }

    pub fn prepare_for_insert(&self, password_hash: String) -> UserInsert {
        UserInsert {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password_hash,
            bio: self.bio.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
