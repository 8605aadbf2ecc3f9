use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::common::{not_found, storage_error_response};
use crate::routes::resources::common::ResourceListQuery;
use crate::state::AppState;

/// GET /api/resources?category=
///
/// Lists resources newest-first, optionally narrowed to one category.
pub async fn list_resources(
    State(app_state): State<AppState>,
    Query(query): Query<ResourceListQuery>,
) -> Response {
    match app_state
        .storage()
        .list_resources(query.category.as_deref())
        .await
    {
        Ok(resources) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                resources,
                "Resources fetched successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}

/// GET /api/resources/{resource_id}
pub async fn get_resource(
    State(app_state): State<AppState>,
    Path(resource_id): Path<i64>,
) -> Response {
    match app_state.storage().get_resource(resource_id).await {
        Ok(Some(resource)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                resource,
                "Resource fetched successfully",
            )),
        )
            .into_response(),
        Ok(None) => not_found("Resource"),
        Err(err) => storage_error_response(err),
    }
}
