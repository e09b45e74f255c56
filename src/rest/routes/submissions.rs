//! Submission intake endpoints.

use axum::{extract::State, http::StatusCode, Json};

use crate::rest::dto::{SubmissionResponse, SubmissionsInfoResponse};
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::state::ApiState;
use crate::submit::SubmissionRequest;

/// Submit a new directory entry
///
/// Accepted submissions are forwarded to the configured store and queued
/// for review; they do not appear in the catalog until the seed data is
/// republished.
#[utoipa::path(
    post,
    path = "/api/v1/submissions",
    tag = "Submissions",
    request_body = SubmissionRequest,
    responses(
        (status = 201, description = "Submission accepted and pending review", body = SubmissionResponse),
        (status = 400, description = "Missing name, description, or category", body = ErrorResponse),
        (status = 502, description = "The configured webhook rejected the submission", body = ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ApiState>,
    Json(request): Json<SubmissionRequest>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    request.validate()?;

    let stored = request.into_stored();
    state.sink.store(&stored).await?;

    tracing::info!(id = %stored.id, name = %stored.request.name, "new submission received");

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            message: "Submission received, pending review".to_string(),
            id: stored.id,
        }),
    ))
}

/// Describe where submissions are stored
#[utoipa::path(
    get,
    path = "/api/v1/submissions",
    tag = "Submissions",
    responses(
        (status = 200, description = "Submission storage info", body = SubmissionsInfoResponse)
    )
)]
pub async fn info(State(state): State<ApiState>) -> Json<SubmissionsInfoResponse> {
    Json(SubmissionsInfoResponse {
        message: format!("Submissions are stored in {}", state.sink.describe()),
        webhook_configured: state.webhook_configured(),
    })
}
