use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::{storage_error_response, validation_error_response};
use crate::routes::schedule::common::CreateScheduleSlotRequest;
use crate::state::AppState;

/// POST /api/schedule
///
/// Admin-only.
pub async fn create_schedule_slot(
    State(app_state): State<AppState>,
    Json(req): Json<CreateScheduleSlotRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    match app_state
        .storage()
        .create_schedule_slot(req.into_input())
        .await
    {
        Ok(slot) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                slot,
                "Schedule slot created successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
