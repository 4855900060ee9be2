//! Review request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_FEEDBACK_LENGTH;

/// Create review request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub swap_request_id: i64,

    pub reviewee_id: i64,

    #[validate(range(min = 1, max = 5))]
    pub rating: i64,

    #[validate(length(max = MAX_FEEDBACK_LENGTH))]
    pub feedback: Option<String>,
}
