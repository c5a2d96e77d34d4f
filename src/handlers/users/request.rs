//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DISPLAY_NAME_LENGTH, MIN_DISPLAY_NAME_LENGTH};

/// Administrative user creation request (no login credential)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_DISPLAY_NAME_LENGTH, max = MAX_DISPLAY_NAME_LENGTH))]
    pub display_name: String,
}
