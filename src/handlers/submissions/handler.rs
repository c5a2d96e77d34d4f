//! Submission handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    extract::ValidatedJson,
    services::SubmissionService,
    state::AppState,
};

use super::{request::CreateSubmissionRequest, response::SubmissionStatusResponse};

/// Create a new pending submission
pub async fn create_submission(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<SubmissionStatusResponse>)> {
    let submission = SubmissionService::create_submission(state.db(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionStatusResponse {
            id: submission.id,
            status: submission.status,
        }),
    ))
}

/// Approve a pending submission and credit its quest's points
pub async fn approve_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionStatusResponse>> {
    let submission = SubmissionService::approve_submission(state.db(), &id).await?;

    Ok(Json(SubmissionStatusResponse {
        id: submission.id,
        status: submission.status,
    }))
}

/// Reject a pending submission
pub async fn reject_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionStatusResponse>> {
    let submission = SubmissionService::reject_submission(state.db(), &id).await?;

    Ok(Json(SubmissionStatusResponse {
        id: submission.id,
        status: submission.status,
    }))
}
