//! Submission request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Submission creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    pub user_id: Uuid,

    pub quest_id: Uuid,

    pub text: Option<String>,

    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}
