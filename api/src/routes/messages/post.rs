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
use crate::routes::messages::common::CreateMessageRequest;
use crate::state::AppState;
use db::storage::NewMessage;

/// POST /api/messages
///
/// The sender is always the caller. A missing recipient makes the message a
/// broadcast; a recipient id that does not exist is a 404.
pub async fn create_message(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
    Json(req): Json<CreateMessageRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    let input = NewMessage {
        sender_id: identity.user_id,
        recipient_id: req.recipient_id,
        content: req.content,
    };

    match app_state.storage().create_message(input).await {
        Ok(message) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(message, "Message sent successfully")),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
