use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::common::storage_error_response;
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(State(app_state): State<AppState>) -> Response {
    match app_state.storage().list_events().await {
        Ok(events) => (
            StatusCode::OK,
            Json(ApiResponse::success(events, "Events fetched successfully")),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
