use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::storage_error_response;
use crate::state::AppState;

/// GET /api/todos
///
/// Always scoped to the caller; there is no way to list another user's
/// todos.
pub async fn list_todos(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
) -> Response {
    match app_state.storage().list_todos(identity.user_id).await {
        Ok(todos) => (
            StatusCode::OK,
            Json(ApiResponse::success(todos, "Todos fetched successfully")),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
