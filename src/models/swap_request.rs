//! Swap request model and status lifecycle
//!
//! The status lifecycle is encoded as an explicit transition table keyed by
//! (current status, requested status, actor role). Every status mutation
//! must pass through this table; there are no other paths.
//!
//! ```text
//! pending ──provider──▶ accepted ──either──▶ completed
//!    ├─────provider──▶ rejected
//!    └─────requester─▶ cancelled
//! ```
//!
//! `rejected`, `cancelled`, and `completed` are terminal.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status of a swap request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

/// A user's role within a given swap request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRole {
    Requester,
    Provider,
}

/// The complete set of legal status transitions
const TRANSITIONS: &[(SwapStatus, SwapStatus, &[SwapRole])] = &[
    (SwapStatus::Pending, SwapStatus::Accepted, &[SwapRole::Provider]),
    (SwapStatus::Pending, SwapStatus::Rejected, &[SwapRole::Provider]),
    (SwapStatus::Pending, SwapStatus::Cancelled, &[SwapRole::Requester]),
    (
        SwapStatus::Accepted,
        SwapStatus::Completed,
        &[SwapRole::Requester, SwapRole::Provider],
    ),
];

impl SwapStatus {
    /// Whether no transition leads out of this status
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Cancelled)
    }

    /// Whether `role` may move a swap from `self` to `target`
    pub fn transition_allowed(self, target: SwapStatus, role: SwapRole) -> bool {
        TRANSITIONS
            .iter()
            .any(|(from, to, roles)| *from == self && *to == target && roles.contains(&role))
    }

    /// The roles entitled to request `target`, regardless of current status
    ///
    /// Used to distinguish "wrong actor" (forbidden) from "right actor,
    /// illegal edge" (conflict) when a transition is refused.
    pub fn roles_for_target(target: SwapStatus) -> &'static [SwapRole] {
        match target {
            SwapStatus::Accepted | SwapStatus::Rejected => &[SwapRole::Provider],
            SwapStatus::Cancelled => &[SwapRole::Requester],
            SwapStatus::Completed => &[SwapRole::Requester, SwapRole::Provider],
            SwapStatus::Pending => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwapStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

/// Swap request database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SwapRequest {
    pub id: i64,
    pub requester_id: i64,
    pub provider_id: i64,
    pub offered_skill_id: i64,
    pub wanted_skill_id: i64,
    pub message: Option<String>,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SwapRequest {
    /// The role `user_id` plays in this swap, if any
    pub fn role_of(&self, user_id: i64) -> Option<SwapRole> {
        if user_id == self.requester_id {
            Some(SwapRole::Requester)
        } else if user_id == self.provider_id {
            Some(SwapRole::Provider)
        } else {
            None
        }
    }
}

/// Swap listing row enriched with both participants and both skills
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SwapWithDetails {
    pub id: i64,
    pub requester_id: i64,
    pub provider_id: i64,
    pub offered_skill_id: i64,
    pub wanted_skill_id: i64,
    pub message: Option<String>,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub requester_name: String,
    pub requester_photo: Option<String>,
    pub provider_name: String,
    pub provider_photo: Option<String>,
    pub offered_skill_title: String,
    pub offered_skill_category: String,
    pub wanted_skill_title: String,
    pub wanted_skill_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [SwapStatus; 5] = [
        SwapStatus::Pending,
        SwapStatus::Accepted,
        SwapStatus::Rejected,
        SwapStatus::Completed,
        SwapStatus::Cancelled,
    ];

    #[test]
    fn test_legal_transitions() {
        assert!(SwapStatus::Pending.transition_allowed(SwapStatus::Accepted, SwapRole::Provider));
        assert!(SwapStatus::Pending.transition_allowed(SwapStatus::Rejected, SwapRole::Provider));
        assert!(SwapStatus::Pending.transition_allowed(SwapStatus::Cancelled, SwapRole::Requester));
        assert!(SwapStatus::Accepted.transition_allowed(SwapStatus::Completed, SwapRole::Requester));
        assert!(SwapStatus::Accepted.transition_allowed(SwapStatus::Completed, SwapRole::Provider));
    }

    #[test]
    fn test_role_violations() {
        assert!(!SwapStatus::Pending.transition_allowed(SwapStatus::Accepted, SwapRole::Requester));
        assert!(!SwapStatus::Pending.transition_allowed(SwapStatus::Rejected, SwapRole::Requester));
        assert!(!SwapStatus::Pending.transition_allowed(SwapStatus::Cancelled, SwapRole::Provider));
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        for current in [SwapStatus::Rejected, SwapStatus::Completed, SwapStatus::Cancelled] {
            assert!(current.is_terminal());
            for target in ALL_STATUSES {
                assert!(!current.transition_allowed(target, SwapRole::Requester));
                assert!(!current.transition_allowed(target, SwapRole::Provider));
            }
        }
    }

    #[test]
    fn test_exactly_five_legal_edges() {
        let mut count = 0;
        for current in ALL_STATUSES {
            for target in ALL_STATUSES {
                for role in [SwapRole::Requester, SwapRole::Provider] {
                    if current.transition_allowed(target, role) {
                        count += 1;
                    }
                }
            }
        }
        // accept, reject, cancel, and complete-by-either-participant
        assert_eq!(count, 5);
    }

    #[test]
    fn test_status_round_trip() {
        for status in ALL_STATUSES {
            assert_eq!(status.as_str().parse::<SwapStatus>(), Ok(status));
        }
        assert!("invalid".parse::<SwapStatus>().is_err());
    }

    #[test]
    fn test_role_of() {
        let swap = SwapRequest {
            id: 1,
            requester_id: 10,
            provider_id: 20,
            offered_skill_id: 1,
            wanted_skill_id: 2,
            message: None,
            status: SwapStatus::Pending,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        assert_eq!(swap.role_of(10), Some(SwapRole::Requester));
        assert_eq!(swap.role_of(20), Some(SwapRole::Provider));
        assert_eq!(swap.role_of(30), None);
    }
}
