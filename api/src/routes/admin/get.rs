use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::common::storage_error_response;
use crate::state::AppState;
use db::models::user::Role;

/// GET /api/admin/students
///
/// Lists every student account in the roster.
pub async fn list_students(State(app_state): State<AppState>) -> Response {
    match app_state.storage().list_users(Some(Role::Student)).await {
        Ok(students) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                students,
                "Students fetched successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
