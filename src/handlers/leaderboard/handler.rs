//! Leaderboard handler implementations

use axum::{extract::State, Json};

use crate::{error::AppResult, services::ScoringService, state::AppState};

use super::response::LeaderboardEntry;

/// Top scorers for the current ISO week
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let entries = ScoringService::leaderboard(state.db()).await?;

    Ok(Json(entries))
}
