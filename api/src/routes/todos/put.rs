use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{
    not_found, not_owner, storage_error_response, validation_error_response,
};
use crate::routes::todos::common::UpdateTodoRequest;
use crate::state::AppState;

/// PUT /api/todos/{todo_id}
///
/// Owner-only: the record is loaded first and the owning foreign key must
/// match the caller before anything is written.
pub async fn update_todo(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
    Path(todo_id): Path<i64>,
    Json(req): Json<UpdateTodoRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    let todo = match app_state.storage().get_todo(todo_id).await {
        Ok(Some(todo)) => todo,
        Ok(None) => return not_found("Todo"),
        Err(err) => return storage_error_response(err),
    };
    if todo.user_id != identity.user_id {
        return not_owner("You do not own this todo");
    }

    match app_state
        .storage()
        .update_todo(todo_id, req.into_patch())
        .await
    {
        Ok(Some(todo)) => (
            StatusCode::OK,
            Json(ApiResponse::success(todo, "Todo updated successfully")),
        )
            .into_response(),
        Ok(None) => not_found("Todo"),
        Err(err) => storage_error_response(err),
    }
}
