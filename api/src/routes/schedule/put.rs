use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::{not_found, storage_error_response, validation_error_response};
use crate::routes::schedule::common::UpdateScheduleSlotRequest;
use crate::state::AppState;

/// PUT /api/schedule/{slot_id}
///
/// Admin-only; used mostly to flip a slot between Active and Cancelled.
pub async fn update_schedule_slot(
    State(app_state): State<AppState>,
    Path(slot_id): Path<i64>,
    Json(req): Json<UpdateScheduleSlotRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    match app_state
        .storage()
        .update_schedule_slot(slot_id, req.into_patch())
        .await
    {
        Ok(Some(slot)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                slot,
                "Schedule slot updated successfully",
            )),
        )
            .into_response(),
        Ok(None) => not_found("Schedule slot"),
        Err(err) => storage_error_response(err),
    }
}
