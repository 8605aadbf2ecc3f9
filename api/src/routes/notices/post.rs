use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::{storage_error_response, validation_error_response};
use crate::routes::notices::common::CreateNoticeRequest;
use crate::state::AppState;

/// POST /api/notices
///
/// Admin-only.
pub async fn create_notice(
    State(app_state): State<AppState>,
    Json(req): Json<CreateNoticeRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    match app_state.storage().create_notice(req.into_input()).await {
        Ok(notice) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(notice, "Notice created successfully")),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
