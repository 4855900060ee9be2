//! Review repository

use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::{Review, ReviewWithReviewer},
};

/// Repository for review database operations
pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review
    pub async fn create(
        pool: &SqlitePool,
        swap_request_id: i64,
        reviewer_id: i64,
        reviewee_id: i64,
        rating: i64,
        feedback: Option<&str>,
    ) -> AppResult<Review> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (swap_request_id, reviewer_id, reviewee_id, rating, feedback)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(swap_request_id)
        .bind(reviewer_id)
        .bind(reviewee_id)
        .bind(rating)
        .bind(feedback)
        .fetch_one(pool)
        .await?;

        Ok(review)
    }

    /// Find the review a given reviewer left for a given swap, if any
    pub async fn find_by_swap_and_reviewer(
        pool: &SqlitePool,
        swap_request_id: i64,
        reviewer_id: i64,
    ) -> AppResult<Option<Review>> {
        let review = sqlx::query_as::<_, Review>(
            r#"SELECT * FROM reviews WHERE swap_request_id = $1 AND reviewer_id = $2"#,
        )
        .bind(swap_request_id)
        .bind(reviewer_id)
        .fetch_optional(pool)
        .await?;

        Ok(review)
    }

    /// Reviews received by a user, newest first, with reviewer identity
    pub async fn list_for_reviewee(
        pool: &SqlitePool,
        reviewee_id: i64,
    ) -> AppResult<Vec<ReviewWithReviewer>> {
        let reviews = sqlx::query_as::<_, ReviewWithReviewer>(
            r#"
            SELECT r.*, u.name AS reviewer_name, u.photo AS reviewer_photo
            FROM reviews r
            JOIN users u ON r.reviewer_id = u.id
            WHERE r.reviewee_id = $1
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .bind(reviewee_id)
        .fetch_all(pool)
        .await?;

        Ok(reviews)
    }
}
