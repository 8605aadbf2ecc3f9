use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{not_found, storage_error_response};
use crate::state::AppState;

/// GET /auth/me
///
/// Returns the profile of the session's user. The password hash never
/// appears in the serialized model.
pub async fn me(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
) -> Response {
    match app_state.storage().get_user(identity.user_id).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(user, "Profile fetched successfully")),
        )
            .into_response(),
        Ok(None) => not_found("User"),
        Err(err) => storage_error_response(err),
    }
}
