//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Request timeout in seconds
pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Maximum request body size in bytes
pub const MAX_REQUEST_BODY_BYTES: usize = 256 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default SQLite database file
pub const DEFAULT_DATABASE_PATH: &str = "skillswap.db";

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Access token expiry in hours
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_HOURS: i64 = 1;

/// Refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

// =============================================================================
// PROFILE LIMITS
// =============================================================================

/// Display name minimum length
pub const MIN_NAME_LENGTH: u64 = 2;

/// Display name maximum length
pub const MAX_NAME_LENGTH: u64 = 50;

/// Location maximum length
pub const MAX_LOCATION_LENGTH: u64 = 100;

/// Bio maximum length
pub const MAX_BIO_LENGTH: u64 = 500;

// =============================================================================
// SKILL LIMITS
// =============================================================================

/// Skill title minimum length
pub const MIN_TITLE_LENGTH: u64 = 2;

/// Skill title maximum length
pub const MAX_TITLE_LENGTH: u64 = 100;

/// Skill description maximum length
pub const MAX_DESCRIPTION_LENGTH: u64 = 500;

// =============================================================================
// SWAP & REVIEW LIMITS
// =============================================================================

/// Swap request message maximum length
pub const MAX_MESSAGE_LENGTH: u64 = 500;

/// Review feedback maximum length
pub const MAX_FEEDBACK_LENGTH: u64 = 500;

/// Minimum review rating
pub const MIN_RATING: i32 = 1;

/// Maximum review rating
pub const MAX_RATING: i32 = 5;

// =============================================================================
// SKILL ENUMERATIONS
// =============================================================================

/// Skill listing types
pub mod skill_types {
    pub const OFFERED: &str = "offered";
    pub const WANTED: &str = "wanted";

    /// All valid skill types
    pub const ALL: &[&str] = &[OFFERED, WANTED];
}

/// Skill proficiency levels
pub mod skill_levels {
    pub const BEGINNER: &str = "beginner";
    pub const INTERMEDIATE: &str = "intermediate";
    pub const ADVANCED: &str = "advanced";

    /// All valid proficiency levels
    pub const ALL: &[&str] = &[BEGINNER, INTERMEDIATE, ADVANCED];
}
