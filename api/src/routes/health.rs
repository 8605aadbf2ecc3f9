use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, Router, response::IntoResponse, routing::get};
use common::config;

/// GET /api/health
///
/// Liveness probe; requires no authentication and touches no storage.
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": config::project_name(),
            "status": "ok",
        }),
        "Service is healthy",
    ))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
