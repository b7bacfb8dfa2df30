use validator::Validate;

use crate::entities::language::{Language, NewLanguage, ProfileLanguage, SetProfileLanguage};
use crate::entities::skill::{NewSkill, ProfileSkill, SetProfileSkill, Skill};
use crate::errors::AppError;
use crate::repositories::catalog::CatalogRepository;
use crate::utils::valid_uuid::valid_uuid;

/// Skills and languages, plus the levels profiles hold in them.
pub struct CatalogHandler<R>
where
    R: CatalogRepository,
{
    pub catalog_repo: R,
}

impl<R> CatalogHandler<R>
where
    R: CatalogRepository,
{
    pub fn new(catalog_repo: R) -> Self {
        CatalogHandler { catalog_repo }
    }

    pub async fn create_skill(&self, request: NewSkill) -> Result<Skill, AppError> {
        request.validate()?;
        self.catalog_repo.create_skill(request.skill_name.trim())
            .await
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.catalog_repo.list_skills().await
    }

    pub async fn get_skill(&self, id: &str) -> Result<Skill, AppError> {
        let valid_id = valid_uuid(id)?;
        self.catalog_repo.get_skill(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))
    }

    pub async fn rename_skill(&self, id: &str, request: NewSkill) -> Result<Skill, AppError> {
        let valid_id = valid_uuid(id)?;
        request.validate()?;
        self.catalog_repo.rename_skill(&valid_id, request.skill_name.trim())
            .await
    }

    pub async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.catalog_repo.delete_skill(&valid_id).await
    }

    pub async fn create_language(&self, request: NewLanguage) -> Result<Language, AppError> {
        request.validate()?;
        self.catalog_repo.create_language(request.language_name.trim())
            .await
    }

    pub async fn list_languages(&self) -> Result<Vec<Language>, AppError> {
        self.catalog_repo.list_languages().await
    }

    pub async fn get_language(&self, id: &str) -> Result<Language, AppError> {
        let valid_id = valid_uuid(id)?;
        self.catalog_repo.get_language(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Language not found".to_string()))
    }

    pub async fn rename_language(&self, id: &str, request: NewLanguage) -> Result<Language, AppError> {
        let valid_id = valid_uuid(id)?;
        request.validate()?;
        self.catalog_repo.rename_language(&valid_id, request.language_name.trim())
            .await
    }

    pub async fn delete_language(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.catalog_repo.delete_language(&valid_id).await
    }

    pub async fn set_profile_skill(&self, profile_id: &str, request: SetProfileSkill) -> Result<ProfileSkill, AppError> {
        let valid_id = valid_uuid(profile_id)?;
        request.validate()?;
        self.catalog_repo.set_profile_skill(&valid_id, &request).await
    }

    pub async fn list_profile_skills(&self, profile_id: &str) -> Result<Vec<ProfileSkill>, AppError> {
        let valid_id = valid_uuid(profile_id)?;
        self.catalog_repo.list_profile_skills(&valid_id).await
    }

    pub async fn remove_profile_skill(&self, profile_id: &str, skill_id: &str) -> Result<(), AppError> {
        let profile_id = valid_uuid(profile_id)?;
        let skill_id = valid_uuid(skill_id)?;
        self.catalog_repo.remove_profile_skill(&profile_id, &skill_id).await
    }

    pub async fn set_profile_language(&self, profile_id: &str, request: SetProfileLanguage) -> Result<ProfileLanguage, AppError> {
        let valid_id = valid_uuid(profile_id)?;
        request.validate()?;
        self.catalog_repo.set_profile_language(&valid_id, &request).await
    }

    pub async fn list_profile_languages(&self, profile_id: &str) -> Result<Vec<ProfileLanguage>, AppError> {
        let valid_id = valid_uuid(profile_id)?;
        self.catalog_repo.list_profile_languages(&valid_id).await
    }

    pub async fn remove_profile_language(&self, profile_id: &str, language_id: &str) -> Result<(), AppError> {
        let profile_id = valid_uuid(profile_id)?;
        let language_id = valid_uuid(language_id)?;
        self.catalog_repo.remove_profile_language(&profile_id, &language_id).await
    }
}
