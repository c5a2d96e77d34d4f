//! Submission response DTOs

use serde::Serialize;
use uuid::Uuid;

/// Submission id and review status
#[derive(Debug, Serialize)]
pub struct SubmissionStatusResponse {
    pub id: Uuid,
    pub status: String,
}
