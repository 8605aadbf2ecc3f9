use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::{storage_error_response, validation_error_response};
use crate::routes::events::common::CreateEventRequest;
use crate::state::AppState;

/// POST /api/events
///
/// Admin-only.
pub async fn create_event(
    State(app_state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    match app_state.storage().create_event(req.into_input()).await {
        Ok(event) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(event, "Event created successfully")),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
