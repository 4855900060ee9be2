//! Review ledger service

use sqlx::SqlitePool;

use crate::{
    db::repositories::{ReviewRepository, SwapRepository},
    error::{AppError, AppResult},
    models::{Review, ReviewWithReviewer, SwapStatus},
};

/// Review ledger business logic
pub struct ReviewService;

impl ReviewService {
    /// Record a one-sided rating for a completed swap
    ///
    /// Ordered checks, each a distinct failure: the swap exists and is
    /// completed; the reviewer participated in it; the reviewee is a
    /// participant; the reviewer is not reviewing themselves; the reviewer
    /// has not already reviewed this swap. Reviews are immutable once
    /// written.
    pub async fn create(
        pool: &SqlitePool,
        reviewer_id: i64,
        swap_request_id: i64,
        reviewee_id: i64,
        rating: i64,
        feedback: Option<&str>,
    ) -> AppResult<Review> {
        let swap = SwapRepository::find_by_id(pool, swap_request_id)
            .await?
            .filter(|s| s.status == SwapStatus::Completed)
            .ok_or_else(|| {
                AppError::InvalidInput("Swap request not found or not completed".to_string())
            })?;

        if swap.role_of(reviewer_id).is_none() {
            return Err(AppError::Forbidden(
                "You can only review swaps you participated in".to_string(),
            ));
        }

        if swap.role_of(reviewee_id).is_none() {
            return Err(AppError::InvalidInput("Invalid reviewee".to_string()));
        }

        if reviewer_id == reviewee_id {
            return Err(AppError::InvalidInput(
                "You cannot review yourself".to_string(),
            ));
        }

        if ReviewRepository::find_by_swap_and_reviewer(pool, swap_request_id, reviewer_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You have already reviewed this swap".to_string(),
            ));
        }

        ReviewRepository::create(pool, swap_request_id, reviewer_id, reviewee_id, rating, feedback)
            .await
    }

    /// Reviews received by a user, newest first
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> AppResult<Vec<ReviewWithReviewer>> {
        ReviewRepository::list_for_reviewee(pool, user_id).await
    }
}
