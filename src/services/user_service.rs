//! User profile service

use sqlx::SqlitePool;

use crate::{
    db::repositories::{AvailabilityRepository, UserRepository},
    error::{AppError, AppResult},
    models::{AvailabilitySlot, NewAvailabilitySlot, User},
    utils::validation::{validate_day_of_week, validate_time_of_day},
};

/// Derived profile statistics, computed per read
#[derive(Debug, Clone, Copy)]
pub struct ProfileStats {
    pub swaps_completed: i64,
    /// Average received rating rounded to one decimal, None when unreviewed
    pub average_rating: Option<f64>,
}

/// User profile business logic
pub struct UserService;

impl UserService {
    /// Fetch a user with their derived stats
    pub async fn get_with_stats(pool: &SqlitePool, user_id: i64) -> AppResult<(User, ProfileStats)> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let stats = Self::stats(pool, user_id).await?;
        Ok((user, stats))
    }

    /// Update the caller's profile fields; absent fields are left unchanged
    pub async fn update_profile(
        pool: &SqlitePool,
        user_id: i64,
        name: Option<&str>,
        location: Option<&str>,
        bio: Option<&str>,
        photo: Option<&str>,
    ) -> AppResult<User> {
        if name.is_none() && location.is_none() && bio.is_none() && photo.is_none() {
            return Err(AppError::InvalidInput(
                "No valid fields to update".to_string(),
            ));
        }

        UserRepository::update_profile(pool, user_id, name, location, bio, photo).await
    }

    /// The caller's availability slots
    pub async fn get_availability(
        pool: &SqlitePool,
        user_id: i64,
    ) -> AppResult<Vec<AvailabilitySlot>> {
        AvailabilityRepository::list_for_user(pool, user_id).await
    }

    /// Replace the caller's availability slots
    pub async fn set_availability(
        pool: &SqlitePool,
        user_id: i64,
        slots: &[NewAvailabilitySlot],
    ) -> AppResult<Vec<AvailabilitySlot>> {
        for slot in slots {
            validate_day_of_week(slot.day_of_week)
                .map_err(|e| AppError::Validation(e.to_string()))?;
            validate_time_of_day(&slot.start_time)
                .map_err(|e| AppError::Validation(e.to_string()))?;
            validate_time_of_day(&slot.end_time)
                .map_err(|e| AppError::Validation(e.to_string()))?;
            if slot.start_time >= slot.end_time {
                return Err(AppError::Validation(
                    "Availability must start before it ends".to_string(),
                ));
            }
        }

        AvailabilityRepository::replace_for_user(pool, user_id, slots).await?;
        AvailabilityRepository::list_for_user(pool, user_id).await
    }

    async fn stats(pool: &SqlitePool, user_id: i64) -> AppResult<ProfileStats> {
        let swaps_completed = UserRepository::completed_swap_count(pool, user_id).await?;
        let average_rating = UserRepository::average_rating(pool, user_id)
            .await?
            .map(|avg| (avg * 10.0).round() / 10.0);

        Ok(ProfileStats {
            swaps_completed,
            average_rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::{SkillRepository, UserRepository};
    use crate::models::User;
    use crate::services::{ReviewService, SwapService};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::run_migrations(&pool).await.unwrap();
        pool
    }

    async fn seed_user(pool: &SqlitePool, name: &str, email: &str) -> User {
        UserRepository::create(pool, name, email, "hash", None, None)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_fresh_user_has_empty_stats() {
        let pool = setup().await;
        let alice = seed_user(&pool, "Alice", "a@x.com").await;

        let (user, stats) = UserService::get_with_stats(&pool, alice.id).await.unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(stats.swaps_completed, 0);
        assert_eq!(stats.average_rating, None);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let pool = setup().await;
        let err = UserService::get_with_stats(&pool, 999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stats_derived_from_completed_swaps_and_reviews() {
        let pool = setup().await;
        let a = seed_user(&pool, "Alice", "a@x.com").await;
        let b = seed_user(&pool, "Bob", "b@x.com").await;
        let guitar = SkillRepository::create(&pool, a.id, "Guitar", None, "Music", "offered", None)
            .await
            .unwrap();
        let yoga = SkillRepository::create(&pool, b.id, "Yoga", None, "Fitness", "offered", None)
            .await
            .unwrap();

        let swap = SwapService::create(&pool, b.id, a.id, yoga.id, guitar.id, None)
            .await
            .unwrap();
        SwapService::update_status(&pool, swap.id, a.id, "accepted")
            .await
            .unwrap();

        // Accepted but not completed does not count
        let (_, stats) = UserService::get_with_stats(&pool, a.id).await.unwrap();
        assert_eq!(stats.swaps_completed, 0);

        SwapService::update_status(&pool, swap.id, b.id, "completed")
            .await
            .unwrap();
        ReviewService::create(&pool, b.id, swap.id, a.id, 4, None)
            .await
            .unwrap();

        let (_, stats) = UserService::get_with_stats(&pool, a.id).await.unwrap();
        assert_eq!(stats.swaps_completed, 1);
        assert_eq!(stats.average_rating, Some(4.0));

        // Both participants completed the same swap
        let (_, stats) = UserService::get_with_stats(&pool, b.id).await.unwrap();
        assert_eq!(stats.swaps_completed, 1);
        assert_eq!(stats.average_rating, None);
    }

    #[tokio::test]
    async fn test_update_profile_partial() {
        let pool = setup().await;
        let alice = seed_user(&pool, "Alice", "a@x.com").await;

        let updated =
            UserService::update_profile(&pool, alice.id, None, Some("Lisbon"), None, None)
                .await
                .unwrap();
        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.location.as_deref(), Some("Lisbon"));

        let err = UserService::update_profile(&pool, alice.id, None, None, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_availability_replace() {
        let pool = setup().await;
        let alice = seed_user(&pool, "Alice", "a@x.com").await;

        let slots = vec![
            NewAvailabilitySlot {
                day_of_week: 6,
                start_time: "09:00".to_string(),
                end_time: "12:00".to_string(),
            },
            NewAvailabilitySlot {
                day_of_week: 2,
                start_time: "18:00".to_string(),
                end_time: "20:00".to_string(),
            },
        ];

        let stored = UserService::set_availability(&pool, alice.id, &slots)
            .await
            .unwrap();
        assert_eq!(stored.len(), 2);
        // Ordered by day of week
        assert_eq!(stored[0].day_of_week, 2);

        // Replacement drops prior slots
        let stored = UserService::set_availability(&pool, alice.id, &slots[..1])
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].day_of_week, 6);
    }

    #[tokio::test]
    async fn test_availability_validation() {
        let pool = setup().await;
        let alice = seed_user(&pool, "Alice", "a@x.com").await;

        let bad_day = [NewAvailabilitySlot {
            day_of_week: 7,
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
        }];
        let err = UserService::set_availability(&pool, alice.id, &bad_day)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let inverted = [NewAvailabilitySlot {
            day_of_week: 1,
            start_time: "12:00".to_string(),
            end_time: "09:00".to_string(),
        }];
        let err = UserService::set_availability(&pool, alice.id, &inverted)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
