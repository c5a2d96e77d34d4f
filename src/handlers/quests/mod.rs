//! Quest handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Quest routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(handler::list_quests).post(handler::create_quest))
}
