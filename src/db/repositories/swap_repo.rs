//! Swap request repository

use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::{SwapRequest, SwapStatus, SwapWithDetails},
};

/// Repository for swap request database operations
pub struct SwapRepository;

impl SwapRepository {
    /// Create a new swap request (starts `pending`)
    pub async fn create(
        pool: &SqlitePool,
        requester_id: i64,
        provider_id: i64,
        offered_skill_id: i64,
        wanted_skill_id: i64,
        message: Option<&str>,
    ) -> AppResult<SwapRequest> {
        let swap = sqlx::query_as::<_, SwapRequest>(
            r#"
            INSERT INTO swap_requests (requester_id, provider_id, offered_skill_id, wanted_skill_id, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(requester_id)
        .bind(provider_id)
        .bind(offered_skill_id)
        .bind(wanted_skill_id)
        .bind(message)
        .fetch_one(pool)
        .await?;

        Ok(swap)
    }

    /// Find swap request by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> AppResult<Option<SwapRequest>> {
        let swap = sqlx::query_as::<_, SwapRequest>(r#"SELECT * FROM swap_requests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(swap)
    }

    /// List swaps where the user is requester or provider, newest first
    ///
    /// Rows are enriched with both participants' public fields and both
    /// skills' title/category for display.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
        status: Option<SwapStatus>,
    ) -> AppResult<Vec<SwapWithDetails>> {
        let swaps = sqlx::query_as::<_, SwapWithDetails>(
            r#"
            SELECT sr.*,
                   u1.name AS requester_name, u1.photo AS requester_photo,
                   u2.name AS provider_name, u2.photo AS provider_photo,
                   s1.title AS offered_skill_title, s1.category AS offered_skill_category,
                   s2.title AS wanted_skill_title, s2.category AS wanted_skill_category
            FROM swap_requests sr
            JOIN users u1 ON sr.requester_id = u1.id
            JOIN users u2 ON sr.provider_id = u2.id
            JOIN skills s1 ON sr.offered_skill_id = s1.id
            JOIN skills s2 ON sr.wanted_skill_id = s2.id
            WHERE (sr.requester_id = $1 OR sr.provider_id = $1)
                AND ($2 IS NULL OR sr.status = $2)
            ORDER BY sr.created_at DESC, sr.id DESC
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(pool)
        .await?;

        Ok(swaps)
    }

    /// Set the status and refresh `updated_at`
    pub async fn update_status(pool: &SqlitePool, id: i64, status: SwapStatus) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE swap_requests
            SET status = $2, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Delete a swap request
    pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM swap_requests WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
