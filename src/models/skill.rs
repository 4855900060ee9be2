//! Skill model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Skill database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    /// One of `offered` or `wanted`
    pub skill_type: String,
    /// One of `beginner`, `intermediate`, `advanced`
    pub level: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Skill listing row joined with its owner's public fields
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillWithOwner {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub skill_type: String,
    pub level: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub user_photo: Option<String>,
    pub user_location: Option<String>,
}
