use crate::entities::engagement::{Applicant, Contributor, CreditVerification, NewApplication, NewContributor};
use crate::errors::AppError;
use crate::repositories::engagement::EngagementRepository;
use crate::utils::valid_uuid::valid_uuid;

/// Applications to tasks and the contributors selected from them.
pub struct EngagementHandler<R>
where
    R: EngagementRepository,
{
    pub engagement_repo: R,
}

impl<R> EngagementHandler<R>
where
    R: EngagementRepository,
{
    pub fn new(engagement_repo: R) -> Self {
        EngagementHandler { engagement_repo }
    }

    pub async fn apply(&self, task_id: &str, request: NewApplication) -> Result<Applicant, AppError> {
        let task_id = valid_uuid(task_id)?;

        let applicant = self.engagement_repo.create_applicant(&task_id, &request.profile_id).await?;
        tracing::info!(%task_id, profile_id = %request.profile_id, "Application received");

        Ok(applicant)
    }

    pub async fn list_applicants(&self, task_id: &str) -> Result<Vec<Applicant>, AppError> {
        let task_id = valid_uuid(task_id)?;
        self.engagement_repo.list_applicants_for_task(&task_id).await
    }

    pub async fn list_applications(&self, profile_id: &str) -> Result<Vec<Applicant>, AppError> {
        let profile_id = valid_uuid(profile_id)?;
        self.engagement_repo.list_applications_for_profile(&profile_id).await
    }

    pub async fn withdraw(&self, task_id: &str, profile_id: &str) -> Result<(), AppError> {
        let task_id = valid_uuid(task_id)?;
        let profile_id = valid_uuid(profile_id)?;
        self.engagement_repo.delete_applicant(&task_id, &profile_id).await
    }

    pub async fn select_contributor(&self, task_id: &str, request: NewContributor) -> Result<Contributor, AppError> {
        let task_id = valid_uuid(task_id)?;

        let contributor = self.engagement_repo.create_contributor(&task_id, &request.profile_id).await?;
        tracing::info!(%task_id, profile_id = %request.profile_id, "Contributor selected");

        Ok(contributor)
    }

    pub async fn list_contributors(&self, task_id: &str) -> Result<Vec<Contributor>, AppError> {
        let task_id = valid_uuid(task_id)?;
        self.engagement_repo.list_contributors_for_task(&task_id).await
    }

    pub async fn verify_credit(&self, task_id: &str, profile_id: &str, request: CreditVerification) -> Result<Contributor, AppError> {
        let task_id = valid_uuid(task_id)?;
        let profile_id = valid_uuid(profile_id)?;
        self.engagement_repo.set_credit_verified(&task_id, &profile_id, request.is_credit_verified).await
    }

    pub async fn remove_contributor(&self, task_id: &str, profile_id: &str) -> Result<(), AppError> {
        let task_id = valid_uuid(task_id)?;
        let profile_id = valid_uuid(profile_id)?;
        self.engagement_repo.delete_contributor(&task_id, &profile_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::repositories::engagement::MockEngagementRepository;

    #[tokio::test]
    async fn withdraw_rejects_malformed_ids() {
        let mut repo = MockEngagementRepository::new();
        repo.expect_delete_applicant().never();

        let handler = EngagementHandler::new(repo);
        let err = handler.withdraw("task", &Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn verify_credit_passes_flag_through() {
        let task_id = Uuid::new_v4();
        let profile_id = Uuid::new_v4();
        let mut repo = MockEngagementRepository::new();
        repo.expect_set_credit_verified()
            .with(eq(task_id), eq(profile_id), eq(true))
            .times(1)
            .returning(|task_id, profile_id, verified| {
                Ok(Contributor {
                    id: Uuid::new_v4(),
                    profile_id: *profile_id,
                    task_id: *task_id,
                    is_credit_verified: verified,
                    selected_at: chrono::Utc::now(),
                })
            });

        let handler = EngagementHandler::new(repo);
        let contributor = handler
            .verify_credit(&task_id.to_string(), &profile_id.to_string(), CreditVerification { is_credit_verified: true })
            .await
            .unwrap();
        assert!(contributor.is_credit_verified);
    }

    #[tokio::test]
    async fn unknown_profile_stays_not_found() {
        let mut repo = MockEngagementRepository::new();
        repo.expect_create_contributor()
            .returning(|_, _| Err(AppError::NotFound("Task or profile not found".into())));

        let handler = EngagementHandler::new(repo);
        let err = handler
            .select_contributor(&Uuid::new_v4().to_string(), NewContributor { profile_id: Uuid::new_v4() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
