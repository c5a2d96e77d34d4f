//! User service

use sqlx::SqlitePool;

use crate::{db::repositories::UserRepository, error::AppResult, models::User};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Create a user without a login credential.
    ///
    /// Used by the administrative API; such users appear on the
    /// leaderboard but cannot log in until a password is set.
    pub async fn create_user(
        pool: &SqlitePool,
        email: &str,
        display_name: &str,
    ) -> AppResult<User> {
        UserRepository::create(pool, email, display_name, None).await
    }
}
