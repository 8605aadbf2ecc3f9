use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::storage_error_response;
use crate::routes::submissions::common::SubmissionListQuery;
use crate::state::AppState;
use db::models::user::Role;
use db::storage::SubmissionFilter;

/// GET /api/submissions?assignment_id=&student_id=
///
/// Admins may filter freely; students always get their own submissions
/// regardless of the `student_id` parameter.
pub async fn list_submissions(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
    Query(query): Query<SubmissionListQuery>,
) -> Response {
    let student_id = match identity.role {
        Role::Admin => query.student_id,
        Role::Student => Some(identity.user_id),
    };

    let filter = SubmissionFilter {
        assignment_id: query.assignment_id,
        student_id,
    };

    match app_state.storage().list_submissions(filter).await {
        Ok(submissions) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                submissions,
                "Submissions fetched successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
