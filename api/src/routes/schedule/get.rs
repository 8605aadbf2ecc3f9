use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::common::storage_error_response;
use crate::routes::schedule::common::ScheduleListQuery;
use crate::state::AppState;

/// GET /api/schedule?day=
///
/// Lists timetable slots, optionally narrowed to one day of the week.
pub async fn list_schedule(
    State(app_state): State<AppState>,
    Query(query): Query<ScheduleListQuery>,
) -> Response {
    match app_state.storage().list_schedule(query.day.as_deref()).await {
        Ok(slots) => (
            StatusCode::OK,
            Json(ApiResponse::success(slots, "Schedule fetched successfully")),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
