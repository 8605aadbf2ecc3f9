use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::routes::common::{not_found, storage_error_response};
use crate::state::AppState;

/// DELETE /api/assignments/{assignment_id}
///
/// 204 on the first delete of an id, 404 afterwards.
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> Response {
    match app_state.storage().delete_assignment(assignment_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => not_found("Assignment"),
        Err(err) => storage_error_response(err),
    }
}
