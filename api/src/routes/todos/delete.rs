use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::auth::AuthUser;
use crate::routes::common::{not_found, not_owner, storage_error_response};
use crate::state::AppState;

/// DELETE /api/todos/{todo_id}
///
/// Owner-only, idempotent: the second delete of the same id is a 404.
pub async fn delete_todo(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
    Path(todo_id): Path<i64>,
) -> Response {
    let todo = match app_state.storage().get_todo(todo_id).await {
        Ok(Some(todo)) => todo,
        Ok(None) => return not_found("Todo"),
        Err(err) => return storage_error_response(err),
    };
    if todo.user_id != identity.user_id {
        return not_owner("You do not own this todo");
    }

    match app_state.storage().delete_todo(todo_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => not_found("Todo"),
        Err(err) => storage_error_response(err),
    }
}
