use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::admin::common::UpdateStudentRequest;
use crate::routes::common::{not_found, storage_error_response, validation_error_response};
use crate::state::AppState;

/// PUT /api/admin/student-ids/{user_id}
///
/// Updates roster profile fields. Role and username cannot be changed
/// through this or any other endpoint.
pub async fn update_student(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    match app_state
        .storage()
        .update_user(user_id, req.into_patch())
        .await
    {
        Ok(Some(student)) => (
            StatusCode::OK,
            Json(ApiResponse::success(student, "Student updated successfully")),
        )
            .into_response(),
        Ok(None) => not_found("Student"),
        Err(err) => storage_error_response(err),
    }
}
