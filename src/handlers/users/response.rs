//! User profile response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{models::User, services::user_service::ProfileStats};

/// The caller's own profile with derived stats
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub swaps_completed: i64,
    pub average_rating: Option<f64>,
}

impl ProfileResponse {
    pub fn new(user: User, stats: ProfileStats) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            photo: user.photo,
            location: user.location,
            bio: user.bio,
            created_at: user.created_at,
            updated_at: user.updated_at,
            swaps_completed: stats.swaps_completed,
            average_rating: stats.average_rating,
        }
    }
}

/// Another user's public profile with derived stats
///
/// Email is deliberately absent.
#[derive(Debug, Serialize)]
pub struct PublicUserResponse {
    pub id: i64,
    pub name: String,
    pub photo: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub swaps_completed: i64,
    pub average_rating: Option<f64>,
}

impl PublicUserResponse {
    pub fn new(user: User, stats: ProfileStats) -> Self {
        Self {
            id: user.id,
            name: user.name,
            photo: user.photo,
            location: user.location,
            bio: user.bio,
            created_at: user.created_at,
            swaps_completed: stats.swaps_completed,
            average_rating: stats.average_rating,
        }
    }
}

/// Generic acknowledgement response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
