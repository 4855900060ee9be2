//! Review response DTOs

use serde::Serialize;

use crate::models::Review;

/// Review creation response
#[derive(Debug, Serialize)]
pub struct CreateReviewResponse {
    pub message: String,
    pub review: Review,
}
