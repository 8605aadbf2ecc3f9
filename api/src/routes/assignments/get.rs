use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::common::{not_found, storage_error_response};
use crate::state::AppState;

/// GET /api/assignments
///
/// Lists all assignments, newest posting first.
pub async fn list_assignments(State(app_state): State<AppState>) -> Response {
    match app_state.storage().list_assignments().await {
        Ok(assignments) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                assignments,
                "Assignments fetched successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}

/// GET /api/assignments/{assignment_id}
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> Response {
    match app_state.storage().get_assignment(assignment_id).await {
        Ok(Some(assignment)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                assignment,
                "Assignment fetched successfully",
            )),
        )
            .into_response(),
        Ok(None) => not_found("Assignment"),
        Err(err) => storage_error_response(err),
    }
}
