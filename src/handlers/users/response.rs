//! User response DTOs

use serde::Serialize;
use uuid::Uuid;

/// Created user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
}
