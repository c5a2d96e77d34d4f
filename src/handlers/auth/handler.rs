//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    constants::SESSION_COOKIE,
    error::{AppError, AppResult},
    extract::ValidatedJson,
    middleware::auth::AuthenticatedUser,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, LogoutResponse, SessionUser, UserResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = AuthService::register(
        state.db(),
        &payload.email,
        &payload.display_name,
        &payload.password,
    )
    .await?;

    let response = UserResponse {
        id: user.id,
        email: user.email,
        display_name: user.display_name,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<AuthResponse>)> {
    let (user, access_token) =
        AuthService::login(state.db(), state.config(), &payload.email, &payload.password).await?;

    let cookie = Cookie::build((SESSION_COOKIE, access_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    let response = AuthResponse {
        access_token,
        user: SessionUser {
            id: user.id,
            display_name: user.display_name,
        },
    };

    Ok((jar.add(cookie), Json(response)))
}

/// Logout (clear the session cookie; the credential itself is stateless)
pub async fn logout(
    _auth_user: AuthenticatedUser,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<LogoutResponse>)> {
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/"));

    Ok((
        jar,
        Json(LogoutResponse {
            message: "logged out".to_string(),
        }),
    ))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserResponse>> {
    let user = AuthService::get_user_by_id(state.db(), &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse {
        id: user.id,
        email: user.email,
        display_name: user.display_name,
    }))
}
