//! Skill catalog response DTOs

use serde::Serialize;

use crate::models::Skill;

/// Skill creation response
#[derive(Debug, Serialize)]
pub struct CreateSkillResponse {
    pub message: String,
    pub skill: Skill,
}

/// Generic acknowledgement response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
