//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod leaderboard;
pub mod quests;
pub mod submissions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all application routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes(state))
        .nest(
            "/api",
            Router::new()
                .nest("/users", users::routes())
                .nest("/quests", quests::routes())
                .nest("/submissions", submissions::routes())
                .nest("/leaderboard", leaderboard::routes()),
        )
}
