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

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default database URL (file-backed SQLite store, created on first run)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://questboard.db?mode=rwc";

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT signing secret (development only)
pub const DEFAULT_JWT_SECRET: &str = "dev-secret";

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Name of the HTTP-only session cookie carrying the access token
pub const SESSION_COOKIE: &str = "access_token";

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Display name minimum length
pub const MIN_DISPLAY_NAME_LENGTH: u64 = 2;

/// Display name maximum length
pub const MAX_DISPLAY_NAME_LENGTH: u64 = 120;

// =============================================================================
// QUESTS & SCORING
// =============================================================================

/// Maximum quest title length
pub const MAX_QUEST_TITLE_LENGTH: u64 = 200;

/// Point value assigned to a quest when none is given
pub const DEFAULT_QUEST_POINTS: i64 = 10;

/// Maximum number of entries returned by the weekly leaderboard
pub const LEADERBOARD_LIMIT: i64 = 20;
