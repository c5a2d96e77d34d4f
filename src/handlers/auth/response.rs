//! Authentication response DTOs

use serde::Serialize;
use uuid::Uuid;

/// User information returned by registration and /me
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
}

/// Authentication token response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: SessionUser,
}

/// Minimal user info in the login response
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub display_name: String,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}
