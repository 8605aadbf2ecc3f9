use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::admin::common::CreateStudentRequest;
use crate::routes::common::{storage_error_response, validation_error_response};
use crate::state::AppState;

/// POST /api/admin/student-ids
///
/// Creates a student roster entry (a student account with its student
/// number filled in). Duplicate usernames are a 409.
pub async fn create_student(
    State(app_state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    match app_state.storage().create_user(req.into_input()).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(student, "Student created successfully")),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
