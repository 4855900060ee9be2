//! Skill catalog request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, MIN_TITLE_LENGTH};

/// Skill listing filters
#[derive(Debug, Deserialize)]
pub struct ListSkillsQuery {
    pub category: Option<String>,
    pub skill_type: Option<String>,
    pub search: Option<String>,
    pub user_id: Option<i64>,
}

/// Create skill request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub category: String,

    /// `offered` or `wanted`
    pub skill_type: String,

    /// `beginner`, `intermediate`, or `advanced`
    pub level: Option<String>,
}

/// Update skill request (full replacement of mutable fields)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub category: String,

    pub skill_type: String,

    pub level: Option<String>,
}
