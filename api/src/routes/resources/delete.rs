use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::routes::common::{not_found, storage_error_response};
use crate::state::AppState;

/// DELETE /api/resources/{resource_id}
pub async fn delete_resource(
    State(app_state): State<AppState>,
    Path(resource_id): Path<i64>,
) -> Response {
    match app_state.storage().delete_resource(resource_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => not_found("Resource"),
        Err(err) => storage_error_response(err),
    }
}
