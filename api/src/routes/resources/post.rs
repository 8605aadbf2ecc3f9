use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::common::{storage_error_response, validation_error_response};
use crate::routes::resources::common::CreateResourceRequest;
use crate::state::AppState;

/// POST /api/resources
///
/// Admin-only.
pub async fn create_resource(
    State(app_state): State<AppState>,
    Json(req): Json<CreateResourceRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    match app_state.storage().create_resource(req.into_input()).await {
        Ok(resource) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                resource,
                "Resource created successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}
