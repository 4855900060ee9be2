//! Review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Review database model
///
/// Immutable once written; at most one per (swap request, reviewer).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub swap_request_id: i64,
    pub reviewer_id: i64,
    pub reviewee_id: i64,
    pub rating: i64,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Review listing row joined with the reviewer's public fields
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithReviewer {
    pub id: i64,
    pub swap_request_id: i64,
    pub reviewer_id: i64,
    pub reviewee_id: i64,
    pub rating: i64,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reviewer_name: String,
    pub reviewer_photo: Option<String>,
}
