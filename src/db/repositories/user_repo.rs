//! User repository

use sqlx::SqlitePool;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user with a password hash
    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        email: &str,
        password_hash: &str,
        location: Option<&str>,
        bio: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, location, bio)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(location)
        .bind(bio)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Create a user from an external identity provider profile (no password)
    pub async fn create_external(
        pool: &SqlitePool,
        name: &str,
        email: &str,
        photo: Option<&str>,
        google_id: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, photo, google_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(photo)
        .bind(google_id)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Update profile fields, leaving absent ones unchanged
    pub async fn update_profile(
        pool: &SqlitePool,
        id: i64,
        name: Option<&str>,
        location: Option<&str>,
        bio: Option<&str>,
        photo: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                bio = COALESCE($4, bio),
                photo = COALESCE($5, photo),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(location)
        .bind(bio)
        .bind(photo)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Count of completed swaps the user participated in
    ///
    /// Derived at read time together with [`Self::average_rating`]; neither
    /// value is stored.
    pub async fn completed_swap_count(pool: &SqlitePool, user_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM swap_requests
            WHERE (requester_id = $1 OR provider_id = $1) AND status = 'completed'
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Average rating received by the user, None when unreviewed
    pub async fn average_rating(pool: &SqlitePool, user_id: i64) -> AppResult<Option<f64>> {
        let avg: Option<f64> =
            sqlx::query_scalar(r#"SELECT AVG(rating) FROM reviews WHERE reviewee_id = $1"#)
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        Ok(avg)
    }
}
