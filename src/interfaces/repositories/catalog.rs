use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        language::{Language, ProfileLanguage, SetProfileLanguage},
        skill::{ProfileSkill, SetProfileSkill, Skill},
    },
    errors::AppError,
    repositories::{sqlx_repo::SqlxCatalogRepo, violated_constraint, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
};

/// Skills and languages, plus the levels profiles hold in them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn create_skill(&self, skill_name: &str) -> Result<Skill, AppError>;
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn get_skill(&self, id: &Uuid) -> Result<Option<Skill>, AppError>;
    async fn rename_skill(&self, id: &Uuid, skill_name: &str) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;

    async fn create_language(&self, language_name: &str) -> Result<Language, AppError>;
    async fn list_languages(&self) -> Result<Vec<Language>, AppError>;
    async fn get_language(&self, id: &Uuid) -> Result<Option<Language>, AppError>;
    async fn rename_language(&self, id: &Uuid, language_name: &str) -> Result<Language, AppError>;
    async fn delete_language(&self, id: &Uuid) -> Result<(), AppError>;

    async fn set_profile_skill(&self, profile_id: &Uuid, request: &SetProfileSkill) -> Result<ProfileSkill, AppError>;
    async fn list_profile_skills(&self, profile_id: &Uuid) -> Result<Vec<ProfileSkill>, AppError>;
    async fn remove_profile_skill(&self, profile_id: &Uuid, skill_id: &Uuid) -> Result<(), AppError>;

    async fn set_profile_language(&self, profile_id: &Uuid, request: &SetProfileLanguage) -> Result<ProfileLanguage, AppError>;
    async fn list_profile_languages(&self, profile_id: &Uuid) -> Result<Vec<ProfileLanguage>, AppError>;
    async fn remove_profile_language(&self, profile_id: &Uuid, language_id: &Uuid) -> Result<(), AppError>;
}

impl SqlxCatalogRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCatalogRepo { pool }
    }
}

fn map_name_conflict(err: sqlx::Error, what: &str) -> AppError {
    if violated_constraint(&err, UNIQUE_VIOLATION).is_some() {
        AppError::Conflict(format!("{what} already exists"))
    } else {
        AppError::from(err)
    }
}

fn map_link_error(err: sqlx::Error) -> AppError {
    if violated_constraint(&err, FOREIGN_KEY_VIOLATION).is_some() {
        AppError::NotFound("Profile or referenced entry not found".to_string())
    } else {
        AppError::from(err)
    }
}

fn ensure_deleted(rows_affected: u64, what: &str) -> Result<(), AppError> {
    if rows_affected == 0 {
        Err(AppError::NotFound(format!("{what} not found")))
    } else {
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for SqlxCatalogRepo {
    async fn create_skill(&self, skill_name: &str) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>(
            "INSERT INTO skills (skill_name) VALUES ($1) RETURNING id, skill_name"
        )
        .bind(skill_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, "Skill"))
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            "SELECT id, skill_name FROM skills ORDER BY skill_name"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn get_skill(&self, id: &Uuid) -> Result<Option<Skill>, AppError> {
        sqlx::query_as::<_, Skill>("SELECT id, skill_name FROM skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn rename_skill(&self, id: &Uuid, skill_name: &str) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>(
            "UPDATE skills SET skill_name = $2 WHERE id = $1 RETURNING id, skill_name"
        )
        .bind(id)
        .bind(skill_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, "Skill"))?
        .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        ensure_deleted(result.rows_affected(), "Skill")
    }

    async fn create_language(&self, language_name: &str) -> Result<Language, AppError> {
        sqlx::query_as::<_, Language>(
            "INSERT INTO languages (language_name) VALUES ($1) RETURNING id, language_name"
        )
        .bind(language_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, "Language"))
    }

    async fn list_languages(&self) -> Result<Vec<Language>, AppError> {
        let languages = sqlx::query_as::<_, Language>(
            "SELECT id, language_name FROM languages ORDER BY language_name"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(languages)
    }

    async fn get_language(&self, id: &Uuid) -> Result<Option<Language>, AppError> {
        sqlx::query_as::<_, Language>("SELECT id, language_name FROM languages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn rename_language(&self, id: &Uuid, language_name: &str) -> Result<Language, AppError> {
        sqlx::query_as::<_, Language>(
            "UPDATE languages SET language_name = $2 WHERE id = $1 RETURNING id, language_name"
        )
        .bind(id)
        .bind(language_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, "Language"))?
        .ok_or_else(|| AppError::NotFound("Language not found".to_string()))
    }

    async fn delete_language(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        ensure_deleted(result.rows_affected(), "Language")
    }

    async fn set_profile_skill(&self, profile_id: &Uuid, request: &SetProfileSkill) -> Result<ProfileSkill, AppError> {
        sqlx::query_as::<_, ProfileSkill>(
            r#"
            WITH upserted AS (
                INSERT INTO profile_skills (profile_id, skill_id, level_of_proficiency)
                VALUES ($1, $2, $3)
                ON CONFLICT (profile_id, skill_id)
                DO UPDATE SET level_of_proficiency = EXCLUDED.level_of_proficiency
                RETURNING id, profile_id, skill_id, level_of_proficiency
            )
            SELECT u.id, u.profile_id, u.skill_id, s.skill_name, u.level_of_proficiency
            FROM upserted u
            JOIN skills s ON s.id = u.skill_id
            "#
        )
        .bind(profile_id)
        .bind(request.skill_id)
        .bind(request.level_of_proficiency)
        .fetch_one(&self.pool)
        .await
        .map_err(map_link_error)
    }

    async fn list_profile_skills(&self, profile_id: &Uuid) -> Result<Vec<ProfileSkill>, AppError> {
        let skills = sqlx::query_as::<_, ProfileSkill>(
            r#"
            SELECT ps.id, ps.profile_id, ps.skill_id, s.skill_name, ps.level_of_proficiency
            FROM profile_skills ps
            JOIN skills s ON s.id = ps.skill_id
            WHERE ps.profile_id = $1
            ORDER BY s.skill_name
            "#
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn remove_profile_skill(&self, profile_id: &Uuid, skill_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM profile_skills WHERE profile_id = $1 AND skill_id = $2")
            .bind(profile_id)
            .bind(skill_id)
            .execute(&self.pool)
            .await?;

        ensure_deleted(result.rows_affected(), "Profile skill")
    }

    async fn set_profile_language(&self, profile_id: &Uuid, request: &SetProfileLanguage) -> Result<ProfileLanguage, AppError> {
        sqlx::query_as::<_, ProfileLanguage>(
            r#"
            WITH upserted AS (
                INSERT INTO profile_languages (profile_id, language_id, level_of_fluency)
                VALUES ($1, $2, $3)
                ON CONFLICT (profile_id, language_id)
                DO UPDATE SET level_of_fluency = EXCLUDED.level_of_fluency
                RETURNING id, profile_id, language_id, level_of_fluency
            )
            SELECT u.id, u.profile_id, u.language_id, l.language_name, u.level_of_fluency
            FROM upserted u
            JOIN languages l ON l.id = u.language_id
            "#
        )
        .bind(profile_id)
        .bind(request.language_id)
        .bind(request.level_of_fluency)
        .fetch_one(&self.pool)
        .await
        .map_err(map_link_error)
    }

    async fn list_profile_languages(&self, profile_id: &Uuid) -> Result<Vec<ProfileLanguage>, AppError> {
        let languages = sqlx::query_as::<_, ProfileLanguage>(
            r#"
            SELECT pl.id, pl.profile_id, pl.language_id, l.language_name, pl.level_of_fluency
            FROM profile_languages pl
            JOIN languages l ON l.id = pl.language_id
            WHERE pl.profile_id = $1
            ORDER BY l.language_name
            "#
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(languages)
    }

    async fn remove_profile_language(&self, profile_id: &Uuid, language_id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM profile_languages WHERE profile_id = $1 AND language_id = $2")
            .bind(profile_id)
            .bind(language_id)
            .execute(&self.pool)
            .await?;

        ensure_deleted(result.rows_affected(), "Profile language")
    }
}
