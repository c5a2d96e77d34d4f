//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Authentication routes
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login));

    let protected = Router::new()
        .route("/logout", post(handler::logout))
        .route("/me", get(handler::get_current_user))
        .route_layer(axum_middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
