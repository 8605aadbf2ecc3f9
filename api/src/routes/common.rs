//! Shared response mapping for route handlers.

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::storage::StorageError;
use validator::ValidationErrors;

/// Maps a storage failure onto the response taxonomy: missing references
/// are 404, uniqueness violations 409, backend failures 500. Backend errors
/// are logged here and masked in the body.
pub fn storage_error_response(err: StorageError) -> Response {
    match err {
        StorageError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error(err.to_string())),
        )
            .into_response(),
        StorageError::Conflict(msg) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error(msg)),
        )
            .into_response(),
        StorageError::Backend(e) => {
            tracing::error!(error = %e, "storage backend failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Storage backend unavailable")),
            )
                .into_response()
        }
    }
}

/// 400 with the flattened field errors. Runs before any storage call.
pub fn validation_error_response(errors: &ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<Empty>::error(common::format_validation_errors(
            errors,
        ))),
    )
        .into_response()
}

/// 404 for a lookup that came back empty.
pub fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<Empty>::error(format!("{what} not found"))),
    )
        .into_response()
}

/// 403 for an ownership mismatch on personally-owned data.
pub fn not_owner(msg: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ApiResponse::<Empty>::error(msg)),
    )
        .into_response()
}
