use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{not_found, storage_error_response};
use crate::routes::submissions::common::CreateSubmissionRequest;
use crate::state::AppState;
use db::models::submission::Status;
use db::storage::NewSubmission;

/// POST /api/submissions
///
/// Student-only. The caller is always the submitting student; handing in
/// after the due date records the submission as late. Re-submission for the
/// same assignment is allowed.
pub async fn create_submission(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
    Json(req): Json<CreateSubmissionRequest>,
) -> Response {
    let assignment = match app_state.storage().get_assignment(req.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => return not_found("Assignment"),
        Err(err) => return storage_error_response(err),
    };

    let submitted_at = req.submitted_at.unwrap_or_else(|| Utc::now().date_naive());
    let status = if submitted_at > assignment.due_date {
        Status::Late
    } else {
        Status::Submitted
    };

    let input = NewSubmission {
        assignment_id: assignment.id,
        student_id: identity.user_id,
        submitted_at: Some(submitted_at),
        status,
        grade: None,
        feedback: None,
    };

    match app_state.storage().create_submission(input).await {
        Ok(submission) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                submission,
                "Submission created successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
