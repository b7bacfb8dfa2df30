use derive_more::Display;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::entities::user::{PublicUser, SignupForm, EMAIL_TAKEN, USERNAME_TAKEN};
use crate::errors::AppError;
use crate::repositories::user::UserRepository;
use crate::storage::MediaStorage;
use crate::use_cases::profile::remove_image_best_effort;
use crate::utils::valid_uuid::valid_uuid;

pub const SIGNUP_SUCCESS: &str = "Account created successfully! You can now log in.";

/// Rejections surfaced to the person filling in the signup form.
#[derive(Debug, Display, PartialEq)]
pub enum RegistrationError {
    #[display("Passwords do not match!")]
    PasswordMismatch,

    #[display("{}", USERNAME_TAKEN)]
    UsernameTaken,

    #[display("{}", EMAIL_TAKEN)]
    EmailTaken,

    #[display("{_0}")]
    Invalid(String),

    #[display("Registration is unavailable right now, please try again")]
    Unavailable,
}

#[derive(Debug)]
pub struct Registered {
    pub user_id: uuid::Uuid,
    pub message: &'static str,
}

pub struct AccountHandler<R, S>
where
    R: UserRepository,
    S: MediaStorage,
{
    pub user_repo: R,
    pub storage: S,
}

impl<R, S> AccountHandler<R, S>
where
    R: UserRepository,
    S: MediaStorage,
{
    pub fn new(user_repo: R, storage: S) -> Self {
        AccountHandler {
            user_repo,
            storage,
        }
    }

    /// Runs the signup checks in order, then creates the account and its profile.
    ///
    /// The existence checks only order the user-facing messages; the unique
    /// constraints on `users` decide concurrent submissions.
    pub async fn register(&self, form: &SignupForm) -> Result<Registered, RegistrationError> {
        if !form.passwords_match() {
            return Err(RegistrationError::PasswordMismatch);
        }

        form.validate()
            .map_err(|e| RegistrationError::Invalid(AppError::from(e).user_message()))?;

        let insert = form.prepare_for_insert(String::new());

        if self.user_repo.username_exists(&insert.username).await.map_err(unavailable)? {
            return Err(RegistrationError::UsernameTaken);
        }

        if self.user_repo.email_exists(&insert.email).await.map_err(unavailable)? {
            return Err(RegistrationError::EmailTaken);
        }

        let password_hash = hash_password(&form.passwd1).map_err(|e| unavailable(e.into()))?;
        let insert = form.prepare_for_insert(password_hash);

        match self.user_repo.create_user(&insert).await {
            Ok(user_id) => {
                tracing::info!(%user_id, username = %insert.username, "Account registered");
                Ok(Registered { user_id, message: SIGNUP_SUCCESS })
            }
            Err(AppError::Conflict(msg)) if msg == USERNAME_TAKEN => {
                tracing::warn!(username = %insert.username, "Concurrent signup claimed the username first");
                Err(RegistrationError::UsernameTaken)
            }
            Err(AppError::Conflict(msg)) if msg == EMAIL_TAKEN => {
                tracing::warn!("Concurrent signup claimed the email first");
                Err(RegistrationError::EmailTaken)
            }
            Err(e) => Err(unavailable(e)),
        }
    }

    pub async fn get_user(&self, id: &str) -> Result<PublicUser, AppError> {
        let valid_id = valid_uuid(id)?;

        self.user_repo.get_user_by_id(&valid_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Deletes the account and, through the cascade, its profile and everything
    /// referencing it. The profile image is removed afterwards on a best-effort basis.
    pub async fn delete_account(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        let image = self.user_repo.delete_user(&valid_id).await?;
        tracing::info!(user_id = %valid_id, "Account deleted");

        if let Some(key) = image {
            remove_image_best_effort(&self.storage, &key).await;
        }

        Ok(())
    }
}

fn unavailable(err: AppError) -> RegistrationError {
    tracing::error!("Registration failed: {}", err);
    RegistrationError::Unavailable
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::auth::password::verify_password;
    use crate::repositories::user::MockUserRepository;
    use crate::storage::{MockMediaStorage, StorageError};

    fn alice() -> SignupForm {
        SignupForm {
            username: "alice".into(),
            passwd1: "pw123".into(),
            passwd2: "pw123".into(),
            email: "a@x.com".into(),
            bio: "bio text".into(),
        }
    }

    fn handler(repo: MockUserRepository) -> AccountHandler<MockUserRepository, MockMediaStorage> {
        AccountHandler::new(repo, MockMediaStorage::new())
    }

    #[tokio::test]
    async fn registers_a_new_account() {
        let mut repo = MockUserRepository::new();
        let user_id = Uuid::new_v4();
        repo.expect_username_exists().with(eq("alice")).returning(|_| Ok(false));
        repo.expect_email_exists().with(eq("a@x.com")).returning(|_| Ok(false));
        repo.expect_create_user()
            .times(1)
            .withf(|user| {
                user.username == "alice"
                    && user.email == "a@x.com"
                    && user.bio == "bio text"
                    && verify_password("pw123", &user.password_hash).unwrap_or(false)
            })
            .returning(move |_| Ok(user_id));

        let registered = handler(repo).register(&alice()).await.unwrap();

        assert_eq!(registered.user_id, user_id);
        assert_eq!(registered.message, SIGNUP_SUCCESS);
    }

    #[tokio::test]
    async fn password_mismatch_is_checked_first_and_creates_nothing() {
        let mut repo = MockUserRepository::new();
        repo.expect_username_exists().never();
        repo.expect_create_user().never();

        let mut form = alice();
        form.passwd2 = "pw124".into();

        let err = handler(repo).register(&form).await.unwrap_err();
        assert_eq!(err, RegistrationError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords do not match!");
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected_before_email_check() {
        let mut repo = MockUserRepository::new();
        repo.expect_username_exists().returning(|_| Ok(true));
        repo.expect_email_exists().never();
        repo.expect_create_user().never();

        let err = handler(repo).register(&alice()).await.unwrap_err();
        assert_eq!(err.to_string(), "Username already exists!");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let mut repo = MockUserRepository::new();
        repo.expect_username_exists().returning(|_| Ok(false));
        repo.expect_email_exists().returning(|_| Ok(true));
        repo.expect_create_user().never();

        let err = handler(repo).register(&alice()).await.unwrap_err();
        assert_eq!(err, RegistrationError::EmailTaken);
        assert_eq!(err.to_string(), "Email already exists!");
    }

    #[tokio::test]
    async fn unique_violation_from_a_concurrent_signup_maps_to_duplicate_message() {
        let mut repo = MockUserRepository::new();
        repo.expect_username_exists().returning(|_| Ok(false));
        repo.expect_email_exists().returning(|_| Ok(false));
        repo.expect_create_user()
            .returning(|_| Err(AppError::Conflict(USERNAME_TAKEN.to_string())));

        let err = handler(repo).register(&alice()).await.unwrap_err();
        assert_eq!(err, RegistrationError::UsernameTaken);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_with_validator_message() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user().never();

        let mut form = alice();
        form.email = "not-an-email".into();

        let err = handler(repo).register(&form).await.unwrap_err();
        assert_eq!(err, RegistrationError::Invalid("Enter a valid email address".into()));
    }

    #[tokio::test]
    async fn storage_failures_become_a_generic_rejection() {
        let mut repo = MockUserRepository::new();
        repo.expect_username_exists()
            .returning(|_| Err(AppError::InternalError("connection reset".into())));

        let err = handler(repo).register(&alice()).await.unwrap_err();
        assert_eq!(err, RegistrationError::Unavailable);
    }

    #[tokio::test]
    async fn deleting_an_account_removes_its_profile_image() {
        let user_id = Uuid::new_v4();
        let mut repo = MockUserRepository::new();
        repo.expect_delete_user()
            .with(eq(user_id))
            .returning(|_| Ok(Some("profiles/alice.png".to_string())));

        let mut storage = MockMediaStorage::new();
        storage.expect_remove()
            .with(eq("profiles/alice.png"))
            .times(1)
            .returning(|_| Err(StorageError::Io(std::io::ErrorKind::NotFound.into())));

        let handler = AccountHandler::new(repo, storage);
        assert!(handler.delete_account(&user_id.to_string()).await.is_ok());
    }
}
