//! Skill repository

use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::{Skill, SkillWithOwner},
};

/// Repository for skill database operations
pub struct SkillRepository;

impl SkillRepository {
    /// Create a new skill
    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        title: &str,
        description: Option<&str>,
        category: &str,
        skill_type: &str,
        level: Option<&str>,
    ) -> AppResult<Skill> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (user_id, title, description, category, skill_type, level)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(skill_type)
        .bind(level)
        .fetch_one(pool)
        .await?;

        Ok(skill)
    }

    /// Find skill by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Skill>> {
        let skill = sqlx::query_as::<_, Skill>(r#"SELECT * FROM skills WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(skill)
    }

    /// List skills with optional filters, newest first
    ///
    /// `search` matches title or description as a case-insensitive substring.
    pub async fn list(
        pool: &SqlitePool,
        category: Option<&str>,
        skill_type: Option<&str>,
        search: Option<&str>,
        user_id: Option<i64>,
    ) -> AppResult<Vec<SkillWithOwner>> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let skills = sqlx::query_as::<_, SkillWithOwner>(
            r#"
            SELECT s.*, u.name AS user_name, u.photo AS user_photo, u.location AS user_location
            FROM skills s
            JOIN users u ON s.user_id = u.id
            WHERE
                ($1 IS NULL OR s.category = $1)
                AND ($2 IS NULL OR s.skill_type = $2)
                AND ($3 IS NULL OR s.title LIKE $3 OR s.description LIKE $3)
                AND ($4 IS NULL OR s.user_id = $4)
            ORDER BY s.created_at DESC, s.id DESC
            "#,
        )
        .bind(category)
        .bind(skill_type)
        .bind(&search_pattern)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(skills)
    }

    /// Distinct skill categories, alphabetically ordered
    pub async fn list_categories(pool: &SqlitePool) -> AppResult<Vec<String>> {
        let categories: Vec<String> =
            sqlx::query_scalar(r#"SELECT DISTINCT category FROM skills ORDER BY category"#)
                .fetch_all(pool)
                .await?;

        Ok(categories)
    }

    /// Replace all mutable fields of a skill
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        title: &str,
        description: Option<&str>,
        category: &str,
        skill_type: &str,
        level: Option<&str>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE skills
            SET title = $2, description = $3, category = $4, skill_type = $5, level = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(skill_type)
        .bind(level)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Delete a skill
    pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM skills WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
