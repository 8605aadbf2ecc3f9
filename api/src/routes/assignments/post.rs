use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::assignments::common::CreateAssignmentRequest;
use crate::routes::common::{storage_error_response, validation_error_response};
use crate::state::AppState;

/// POST /api/assignments
///
/// Admin-only (enforced by the policy gate before the body is parsed).
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    match app_state
        .storage()
        .create_assignment(req.into_input())
        .await
    {
        Ok(assignment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                assignment,
                "Assignment created successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
