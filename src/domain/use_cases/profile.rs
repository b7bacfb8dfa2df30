use uuid::Uuid;
use validator::Validate;

use crate::entities::profile::{NewProfile, Profile, UpdateProfileRequest};
use crate::errors::AppError;
use crate::repositories::profile::ProfileRepository;
use crate::storage::{profile_image_key, MediaStorage};
use crate::utils::image::{detect_image_extension, ImageError};
use crate::utils::valid_uuid::valid_uuid;

pub struct ProfileHandler<R, S>
where
    R: ProfileRepository,
    S: MediaStorage,
{
    pub profile_repo: R,
    pub storage: S,
    max_image_bytes: usize,
}

impl<R, S> ProfileHandler<R, S>
where
    R: ProfileRepository,
    S: MediaStorage,
{
    pub fn new(profile_repo: R, storage: S, max_image_bytes: usize) -> Self {
        ProfileHandler {
            profile_repo,
            storage,
            max_image_bytes,
        }
    }

    pub async fn create_profile(&self, request: NewProfile) -> Result<Profile, AppError> {
        request.validate()?;

        let profile = self.profile_repo.create_profile(&request).await?;
        tracing::info!(user_id = %profile.user_id, "Profile created");

        Ok(profile)
    }

    pub async fn get_profile(&self, id: &str) -> Result<Profile, AppError> {
        let valid_id = valid_uuid(id)?;
        self.find(&valid_id).await
    }

    pub async fn update_profile(&self, id: &str, request: UpdateProfileRequest) -> Result<Profile, AppError> {
        let valid_id = valid_uuid(id)?;
        request.validate()?;

        let current = self.find(&valid_id).await?;
        self.profile_repo.update_profile(&request.apply(current)).await
    }

    /// Stores the uploaded bytes as the profile's image, replacing any previous file.
    pub async fn upload_image(&self, id: &str, bytes: &[u8]) -> Result<Profile, AppError> {
        let valid_id = valid_uuid(id)?;

        let extension = detect_image_extension(bytes, self.max_image_bytes).map_err(|e| match e {
            ImageError::TooLarge(_) => AppError::PayloadTooLarge(e.to_string()),
            _ => AppError::InvalidInput(e.to_string()),
        })?;

        let key = profile_image_key(&format!("{}.{}", Uuid::new_v4(), extension));
        self.storage.save(&key, bytes).await?;

        let previous = match self.profile_repo.set_profile_image(&valid_id, Some(key.clone())).await {
            Ok(previous) => previous,
            Err(e) => {
                remove_image_best_effort(&self.storage, &key).await;
                return Err(e);
            }
        };

        if let Some(old_key) = previous {
            remove_image_best_effort(&self.storage, &old_key).await;
        }

        tracing::info!(user_id = %valid_id, image = %key, "Profile image updated");
        self.find(&valid_id).await
    }

    /// Deletes the profile record, then its image. A failure to remove the image
    /// is logged and never undoes the deletion.
    pub async fn delete_profile(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        let image = self.profile_repo.delete_profile(&valid_id).await?;
        tracing::info!(user_id = %valid_id, "Profile deleted");

        if let Some(key) = image {
            remove_image_best_effort(&self.storage, &key).await;
        }

        Ok(())
    }

    async fn find(&self, id: &Uuid) -> Result<Profile, AppError> {
        self.profile_repo.get_profile(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }
}

pub async fn remove_image_best_effort<S: MediaStorage + ?Sized>(storage: &S, key: &str) {
    match storage.remove(key).await {
        Ok(()) => tracing::debug!(image = %key, "Removed stored image"),
        Err(e) if e.is_not_found() => {
            tracing::warn!(image = %key, "Stored image already missing, nothing to remove")
        }
        Err(e) => tracing::error!(image = %key, "Failed to remove stored image: {}", e),
    }
}
