use crate::entities::rating::{NewUserRating, UpdateUserRatingRequest, UserRating};
use crate::errors::AppError;
use crate::repositories::rating::RatingRepository;
use crate::utils::valid_uuid::valid_uuid;

pub struct RatingHandler<R>
where
    R: RatingRepository,
{
    pub rating_repo: R,
}

impl<R> RatingHandler<R>
where
    R: RatingRepository,
{
    pub fn new(rating_repo: R) -> Self {
        RatingHandler { rating_repo }
    }

    /// A task carries at most one rating; a second one is a conflict.
    pub async fn rate_task(&self, task_id: &str, request: NewUserRating) -> Result<UserRating, AppError> {
        let task_id = valid_uuid(task_id)?;
        self.rating_repo.create_rating(&request.into_rating(task_id)).await
    }

    pub async fn get_rating(&self, task_id: &str) -> Result<UserRating, AppError> {
        let task_id = valid_uuid(task_id)?;
        self.rating_repo.get_rating(&task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Rating not found".to_string()))
    }

    pub async fn update_rating(&self, task_id: &str, request: UpdateUserRatingRequest) -> Result<UserRating, AppError> {
        let current = self.get_rating(task_id).await?;
        self.rating_repo.update_rating(&request.apply(current)).await
    }

    pub async fn delete_rating(&self, task_id: &str) -> Result<(), AppError> {
        let task_id = valid_uuid(task_id)?;
        self.rating_repo.delete_rating(&task_id).await
    }
}
