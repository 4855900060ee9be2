//! Swap negotiation request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_MESSAGE_LENGTH;

/// Swap listing filter
#[derive(Debug, Deserialize)]
pub struct ListSwapsQuery {
    pub status: Option<String>,
}

/// Create swap request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSwapRequest {
    pub provider_id: i64,

    pub offered_skill_id: i64,

    pub wanted_skill_id: i64,

    #[validate(length(max = MAX_MESSAGE_LENGTH))]
    pub message: Option<String>,
}

/// Status transition request
#[derive(Debug, Deserialize)]
pub struct UpdateSwapStatusRequest {
    pub status: String,
}
