//! Availability repository

use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::{AvailabilitySlot, NewAvailabilitySlot},
};

/// Repository for availability database operations
pub struct AvailabilityRepository;

impl AvailabilityRepository {
    /// List a user's availability slots ordered by day and start time
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> AppResult<Vec<AvailabilitySlot>> {
        let slots = sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            SELECT * FROM availability
            WHERE user_id = $1
            ORDER BY day_of_week, start_time
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(slots)
    }

    /// Replace all of a user's availability slots
    pub async fn replace_for_user(
        pool: &SqlitePool,
        user_id: i64,
        slots: &[NewAvailabilitySlot],
    ) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM availability WHERE user_id = $1"#)
            .bind(user_id)
            .execute(pool)
            .await?;

        for slot in slots {
            sqlx::query(
                r#"
                INSERT INTO availability (user_id, day_of_week, start_time, end_time)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(user_id)
            .bind(slot.day_of_week)
            .bind(&slot.start_time)
            .bind(&slot.end_time)
            .execute(pool)
            .await?;
        }

        Ok(())
    }
}
