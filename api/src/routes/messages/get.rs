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

/// GET /api/messages
///
/// Pre-filtered to the caller: messages they sent, messages addressed to
/// them, and broadcasts.
pub async fn list_messages(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
) -> Response {
    match app_state.storage().list_messages_for(identity.user_id).await {
        Ok(messages) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                messages,
                "Messages fetched successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
