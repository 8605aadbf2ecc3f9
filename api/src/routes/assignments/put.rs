use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::assignments::common::UpdateAssignmentRequest;
use crate::routes::common::{not_found, storage_error_response, validation_error_response};
use crate::state::AppState;

/// PUT /api/assignments/{assignment_id}
///
/// Merges the patch into the stored assignment; an unknown id is a 404 and
/// never creates a record.
pub async fn update_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Json(req): Json<UpdateAssignmentRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    match app_state
        .storage()
        .update_assignment(assignment_id, req.into_patch())
        .await
    {
        Ok(Some(assignment)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                assignment,
                "Assignment updated successfully",
            )),
        )
            .into_response(),
        Ok(None) => not_found("Assignment"),
        Err(err) => storage_error_response(err),
    }
}
