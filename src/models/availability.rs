//! Availability model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A weekly availability interval for a user
///
/// Purely descriptive; nothing else references these rows. `day_of_week`
/// runs 0 (Sunday) through 6, times are `HH:MM` strings.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: i64,
    pub user_id: i64,
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
}

/// An availability interval as submitted by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAvailabilitySlot {
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
}
