use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{storage_error_response, validation_error_response};
use crate::routes::todos::common::CreateTodoRequest;
use crate::state::AppState;
use db::storage::NewTodo;

/// POST /api/todos
///
/// The owner is always the caller; a client-supplied user id would be
/// ignored and is not even part of the request shape.
pub async fn create_todo(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
    Json(req): Json<CreateTodoRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    let input = NewTodo {
        user_id: identity.user_id,
        text: req.text,
    };

    match app_state.storage().create_todo(input).await {
        Ok(todo) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(todo, "Todo created successfully")),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
