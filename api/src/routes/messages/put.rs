use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{not_found, not_owner, storage_error_response};
use crate::state::AppState;

/// PUT /api/messages/{message_id}/read
///
/// Flips the read flag. Allowed for the recipient of a direct message; a
/// broadcast may be marked read by any authenticated user.
pub async fn mark_message_read(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
    Path(message_id): Path<i64>,
) -> Response {
    let message = match app_state.storage().get_message(message_id).await {
        Ok(Some(message)) => message,
        Ok(None) => return not_found("Message"),
        Err(err) => return storage_error_response(err),
    };

    if let Some(recipient_id) = message.recipient_id {
        if recipient_id != identity.user_id {
            return not_owner("Only the recipient can mark this message as read");
        }
    }

    match app_state.storage().mark_message_read(message_id).await {
        Ok(Some(message)) => (
            StatusCode::OK,
            Json(ApiResponse::success(message, "Message marked as read")),
        )
            .into_response(),
        Ok(None) => not_found("Message"),
        Err(err) => storage_error_response(err),
    }
}
