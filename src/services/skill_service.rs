//! Skill catalog service

use sqlx::SqlitePool;

use crate::{
    db::repositories::SkillRepository,
    error::{AppError, AppResult},
    models::{Skill, SkillWithOwner},
    utils::validation::{validate_skill_level, validate_skill_type},
};

/// Skill catalog business logic
pub struct SkillService;

impl SkillService {
    /// List skills with optional filters, newest first
    pub async fn list(
        pool: &SqlitePool,
        category: Option<&str>,
        skill_type: Option<&str>,
        search: Option<&str>,
        user_id: Option<i64>,
    ) -> AppResult<Vec<SkillWithOwner>> {
        SkillRepository::list(pool, category, skill_type, search, user_id).await
    }

    /// Distinct categories across all listings
    pub async fn list_categories(pool: &SqlitePool) -> AppResult<Vec<String>> {
        SkillRepository::list_categories(pool).await
    }

    /// Create a skill owned by `owner_id`
    pub async fn create(
        pool: &SqlitePool,
        owner_id: i64,
        title: &str,
        description: Option<&str>,
        category: &str,
        skill_type: &str,
        level: Option<&str>,
    ) -> AppResult<Skill> {
        Self::validate_enums(skill_type, level)?;

        SkillRepository::create(pool, owner_id, title, description, category, skill_type, level)
            .await
    }

    /// Update a skill; only its owner may do so
    pub async fn update(
        pool: &SqlitePool,
        skill_id: i64,
        owner_id: i64,
        title: &str,
        description: Option<&str>,
        category: &str,
        skill_type: &str,
        level: Option<&str>,
    ) -> AppResult<()> {
        let skill = SkillRepository::find_by_id(pool, skill_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))?;

        if skill.user_id != owner_id {
            return Err(AppError::Forbidden(
                "Not authorized to update this skill".to_string(),
            ));
        }

        Self::validate_enums(skill_type, level)?;

        SkillRepository::update(pool, skill_id, title, description, category, skill_type, level)
            .await
    }

    /// Delete a skill; only its owner may do so
    pub async fn delete(pool: &SqlitePool, skill_id: i64, owner_id: i64) -> AppResult<()> {
        let skill = SkillRepository::find_by_id(pool, skill_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))?;

        if skill.user_id != owner_id {
            return Err(AppError::Forbidden(
                "Not authorized to delete this skill".to_string(),
            ));
        }

        SkillRepository::delete(pool, skill_id).await
    }

    fn validate_enums(skill_type: &str, level: Option<&str>) -> AppResult<()> {
        validate_skill_type(skill_type).map_err(|e| AppError::Validation(e.to_string()))?;
        if let Some(level) = level {
            validate_skill_level(level).map_err(|e| AppError::Validation(e.to_string()))?;
        }
        Ok(())
    }
}
