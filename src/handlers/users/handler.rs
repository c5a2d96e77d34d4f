//! User handler implementations

use axum::{extract::State, http::StatusCode, Json};

use crate::{error::AppResult, extract::ValidatedJson, services::UserService, state::AppState};

use super::{request::CreateUserRequest, response::UserResponse};

/// Create a user without a login credential
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::create_user(state.db(), &payload.email, &payload.display_name).await?;

    let response = UserResponse {
        id: user.id,
        email: user.email,
        display_name: user.display_name,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
