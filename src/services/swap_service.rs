//! Swap negotiation service
//!
//! The one component with real invariants: swap requests move through the
//! status lifecycle defined in [`crate::models::swap_request`], and every
//! mutation is authorized against the caller's role in the swap before the
//! transition table is consulted. A refused transition never touches the row.

use sqlx::SqlitePool;

use crate::{
    db::repositories::{SkillRepository, SwapRepository},
    error::{AppError, AppResult},
    models::{SwapRequest, SwapStatus, SwapWithDetails},
};

/// Swap negotiation business logic
pub struct SwapService;

impl SwapService {
    /// Create a swap request from `requester_id` to `provider_id`
    ///
    /// Preconditions, checked in order: the offered skill must exist and be
    /// owned by the requester; the wanted skill must exist and be owned by
    /// the provider. Nothing prevents a requester from targeting themselves
    /// or filing a duplicate request for the same skill pair.
    pub async fn create(
        pool: &SqlitePool,
        requester_id: i64,
        provider_id: i64,
        offered_skill_id: i64,
        wanted_skill_id: i64,
        message: Option<&str>,
    ) -> AppResult<SwapRequest> {
        let offered = SkillRepository::find_by_id(pool, offered_skill_id).await?;
        if !offered.is_some_and(|s| s.user_id == requester_id) {
            return Err(AppError::InvalidInput(
                "You can only offer your own skills".to_string(),
            ));
        }

        let wanted = SkillRepository::find_by_id(pool, wanted_skill_id).await?;
        if !wanted.is_some_and(|s| s.user_id == provider_id) {
            return Err(AppError::InvalidInput("Invalid wanted skill".to_string()));
        }

        SwapRepository::create(
            pool,
            requester_id,
            provider_id,
            offered_skill_id,
            wanted_skill_id,
            message,
        )
        .await
    }

    /// List the user's swaps, optionally filtered to one status
    pub async fn list(
        pool: &SqlitePool,
        user_id: i64,
        status: Option<&str>,
    ) -> AppResult<Vec<SwapWithDetails>> {
        let status = match status {
            Some(s) => Some(
                s.parse::<SwapStatus>()
                    .map_err(|_| AppError::InvalidInput("Invalid status".to_string()))?,
            ),
            None => None,
        };

        SwapRepository::list_for_user(pool, user_id, status).await
    }

    /// Transition a swap request to `new_status`
    ///
    /// Check order: target status must be one of the four actionable values;
    /// the swap must exist; the caller must hold the role entitled to request
    /// the target status; the edge (current, target) must be in the
    /// transition table. Each failure is distinct and leaves the row as-is.
    pub async fn update_status(
        pool: &SqlitePool,
        swap_id: i64,
        acting_user_id: i64,
        new_status: &str,
    ) -> AppResult<()> {
        let target = new_status
            .parse::<SwapStatus>()
            .ok()
            .filter(|s| *s != SwapStatus::Pending)
            .ok_or_else(|| AppError::InvalidInput("Invalid status".to_string()))?;

        let swap = SwapRepository::find_by_id(pool, swap_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Swap request not found".to_string()))?;

        let role = swap
            .role_of(acting_user_id)
            .filter(|r| SwapStatus::roles_for_target(target).contains(r))
            .ok_or_else(|| AppError::Forbidden(Self::actor_message(target).to_string()))?;

        if !swap.status.transition_allowed(target, role) {
            return Err(AppError::Conflict(format!(
                "Cannot move a {} swap request to {}",
                swap.status, target
            )));
        }

        SwapRepository::update_status(pool, swap_id, target).await
    }

    /// Delete a swap request; only the requester may do so
    pub async fn delete(pool: &SqlitePool, swap_id: i64, user_id: i64) -> AppResult<()> {
        let swap = SwapRepository::find_by_id(pool, swap_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Swap request not found".to_string()))?;

        if swap.requester_id != user_id {
            return Err(AppError::Forbidden(
                "Not authorized to delete this swap request".to_string(),
            ));
        }

        SwapRepository::delete(pool, swap_id).await
    }

    fn actor_message(target: SwapStatus) -> &'static str {
        match target {
            SwapStatus::Accepted | SwapStatus::Rejected => {
                "Only the provider can accept or reject requests"
            }
            SwapStatus::Cancelled => "Only the requester can cancel requests",
            _ => "Not authorized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::UserRepository;
    use crate::models::{Skill, User};
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

    async fn seed_skill(pool: &SqlitePool, owner: &User, title: &str) -> Skill {
        SkillRepository::create(pool, owner.id, title, None, "General", "offered", None)
            .await
            .unwrap()
    }

    /// Two users, each owning one skill, and a pending swap from `b` to `a`
    async fn seed_swap(pool: &SqlitePool) -> (User, User, SwapRequest) {
        let a = seed_user(pool, "Alice", "a@x.com").await;
        let b = seed_user(pool, "Bob", "b@x.com").await;
        let guitar = seed_skill(pool, &a, "Guitar").await;
        let yoga = seed_skill(pool, &b, "Yoga").await;

        // Bob offers his Yoga for Alice's Guitar; Alice is the provider
        let swap = SwapService::create(pool, b.id, a.id, yoga.id, guitar.id, Some("trade?"))
            .await
            .unwrap();

        (a, b, swap)
    }

    async fn fetch(pool: &SqlitePool, id: i64) -> SwapRequest {
        SwapRepository::find_by_id(pool, id).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn test_create_starts_pending() {
        let pool = setup().await;
        let (_, b, swap) = seed_swap(&pool).await;

        assert_eq!(swap.status, SwapStatus::Pending);
        assert_eq!(swap.requester_id, b.id);
        assert_eq!(swap.message.as_deref(), Some("trade?"));
    }

    #[tokio::test]
    async fn test_create_rejects_unowned_offered_skill() {
        let pool = setup().await;
        let a = seed_user(&pool, "Alice", "a@x.com").await;
        let b = seed_user(&pool, "Bob", "b@x.com").await;
        let guitar = seed_skill(&pool, &a, "Guitar").await;
        let yoga = seed_skill(&pool, &b, "Yoga").await;

        // Bob tries to offer Alice's skill
        let err = SwapService::create(&pool, b.id, a.id, guitar.id, guitar.id, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        // Wanted skill not owned by the named provider
        let err = SwapService::create(&pool, b.id, a.id, yoga.id, yoga.id, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        // Missing skill ids fail the same way
        let err = SwapService::create(&pool, b.id, a.id, 999, guitar.id, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_provider_accepts_then_either_completes() {
        let pool = setup().await;
        let (a, b, swap) = seed_swap(&pool).await;

        SwapService::update_status(&pool, swap.id, a.id, "accepted")
            .await
            .unwrap();
        assert_eq!(fetch(&pool, swap.id).await.status, SwapStatus::Accepted);

        // Requester marks it done
        SwapService::update_status(&pool, swap.id, b.id, "completed")
            .await
            .unwrap();
        assert_eq!(fetch(&pool, swap.id).await.status, SwapStatus::Completed);
    }

    #[tokio::test]
    async fn test_requester_cannot_accept_or_reject() {
        let pool = setup().await;
        let (_, b, swap) = seed_swap(&pool).await;

        for target in ["accepted", "rejected"] {
            let err = SwapService::update_status(&pool, swap.id, b.id, target)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Forbidden(_)));
        }
        assert_eq!(fetch(&pool, swap.id).await.status, SwapStatus::Pending);
    }

    #[tokio::test]
    async fn test_provider_cannot_cancel() {
        let pool = setup().await;
        let (a, _, swap) = seed_swap(&pool).await;

        let err = SwapService::update_status(&pool, swap.id, a.id, "cancelled")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(fetch(&pool, swap.id).await.status, SwapStatus::Pending);
    }

    #[tokio::test]
    async fn test_outsider_is_forbidden() {
        let pool = setup().await;
        let (_, _, swap) = seed_swap(&pool).await;
        let mallory = seed_user(&pool, "Mallory", "m@x.com").await;

        for target in ["accepted", "rejected", "cancelled", "completed"] {
            let err = SwapService::update_status(&pool, swap.id, mallory.id, target)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Forbidden(_)));
        }
    }

    #[tokio::test]
    async fn test_terminal_states_refuse_further_transitions() {
        let pool = setup().await;
        let (a, b, swap) = seed_swap(&pool).await;

        SwapService::update_status(&pool, swap.id, a.id, "accepted")
            .await
            .unwrap();
        SwapService::update_status(&pool, swap.id, a.id, "completed")
            .await
            .unwrap();

        let before = fetch(&pool, swap.id).await;

        // Re-accepting a completed swap is refused even though the provider
        // holds the accept role
        let err = SwapService::update_status(&pool, swap.id, a.id, "accepted")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let err = SwapService::update_status(&pool, swap.id, b.id, "completed")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let after = fetch(&pool, swap.id).await;
        assert_eq!(after.status, SwapStatus::Completed);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[tokio::test]
    async fn test_pending_cannot_jump_to_completed() {
        let pool = setup().await;
        let (a, b, swap) = seed_swap(&pool).await;

        for user in [a.id, b.id] {
            let err = SwapService::update_status(&pool, swap.id, user, "completed")
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Conflict(_)));
        }
        assert_eq!(fetch(&pool, swap.id).await.status, SwapStatus::Pending);
    }

    #[tokio::test]
    async fn test_invalid_target_status() {
        let pool = setup().await;
        let (a, _, swap) = seed_swap(&pool).await;

        for target in ["pending", "archived", ""] {
            let err = SwapService::update_status(&pool, swap.id, a.id, target)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }
    }

    #[tokio::test]
    async fn test_unknown_swap_is_not_found() {
        let pool = setup().await;
        let a = seed_user(&pool, "Alice", "a@x.com").await;

        let err = SwapService::update_status(&pool, 999, a.id, "accepted")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_requester_cancels_pending() {
        let pool = setup().await;
        let (_, b, swap) = seed_swap(&pool).await;

        SwapService::update_status(&pool, swap.id, b.id, "cancelled")
            .await
            .unwrap();
        assert_eq!(fetch(&pool, swap.id).await.status, SwapStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_list_enriched_and_filtered() {
        let pool = setup().await;
        let (a, b, swap) = seed_swap(&pool).await;

        let swaps = SwapService::list(&pool, a.id, None).await.unwrap();
        assert_eq!(swaps.len(), 1);
        assert_eq!(swaps[0].id, swap.id);
        assert_eq!(swaps[0].requester_name, "Bob");
        assert_eq!(swaps[0].provider_name, "Alice");
        assert_eq!(swaps[0].offered_skill_title, "Yoga");
        assert_eq!(swaps[0].wanted_skill_title, "Guitar");

        // Status filter
        let pending = SwapService::list(&pool, b.id, Some("pending")).await.unwrap();
        assert_eq!(pending.len(), 1);
        let completed = SwapService::list(&pool, b.id, Some("completed")).await.unwrap();
        assert!(completed.is_empty());

        // A third user sees nothing
        let mallory = seed_user(&pool, "Mallory", "m@x.com").await;
        let none = SwapService::list(&pool, mallory.id, None).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_delete_requester_only() {
        let pool = setup().await;
        let (a, b, swap) = seed_swap(&pool).await;

        let err = SwapService::delete(&pool, swap.id, a.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        SwapService::delete(&pool, swap.id, b.id).await.unwrap();
        assert!(SwapRepository::find_by_id(&pool, swap.id)
            .await
            .unwrap()
            .is_none());
    }
}
