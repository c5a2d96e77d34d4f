//! Leaderboard response DTOs

use serde::Serialize;
use sqlx::FromRow;

/// One leaderboard row: display name and weekly point total
#[derive(Debug, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub user: String,
    pub points: i64,
}
