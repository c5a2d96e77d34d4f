//! Scoring and leaderboard service

use sqlx::SqlitePool;

use crate::{
    constants::LEADERBOARD_LIMIT,
    db::repositories::ScoreRepository,
    error::AppResult,
    handlers::leaderboard::response::LeaderboardEntry,
    utils::time,
};

/// Scoring service for business logic
pub struct ScoringService;

impl ScoringService {
    /// Top scorers for the current ISO week
    pub async fn leaderboard(pool: &SqlitePool) -> AppResult<Vec<LeaderboardEntry>> {
        let week_start = time::week_start_for(time::now_utc());
        ScoreRepository::weekly_top(pool, week_start, LEADERBOARD_LIMIT).await
    }
}
