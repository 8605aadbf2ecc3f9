use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::common::{not_found, storage_error_response};
use crate::state::AppState;

/// GET /api/notices
///
/// Newest-first. Expired notices are included; filtering them is a display
/// concern.
pub async fn list_notices(State(app_state): State<AppState>) -> Response {
    match app_state.storage().list_notices().await {
        Ok(notices) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                notices,
                "Notices fetched successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}

/// GET /api/notices/{notice_id}
pub async fn get_notice(State(app_state): State<AppState>, Path(notice_id): Path<i64>) -> Response {
    match app_state.storage().get_notice(notice_id).await {
        Ok(Some(notice)) => (
            StatusCode::OK,
            Json(ApiResponse::success(notice, "Notice fetched successfully")),
        )
            .into_response(),
        Ok(None) => not_found("Notice"),
        Err(err) => storage_error_response(err),
    }
}
