//! Health check and index handlers

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Index response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub app: String,
    pub message: String,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Index endpoint
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        app: "QuestBoard".to_string(),
        message: "Welcome!".to_string(),
    })
}

/// Health and index routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}
