//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, each protected via the access-control
//! middleware:
//! - `/health` and `/auth/login`, `/auth/register` are public;
//! - everything else sits behind `require_session` (401 before any storage
//!   access);
//! - mutating routes additionally carry a `PolicyRule` enforced by
//!   `enforce_policy`, so role checks come from the single policy table.

use crate::auth::guards::require_session;
use crate::routes::{
    admin::admin_routes, assignments::assignment_routes, auth::auth_routes, events::event_routes,
    health::health_routes, messages::message_routes, notices::notice_routes,
    resources::resource_routes, schedule::schedule_routes, submissions::submission_routes,
    todos::todo_routes,
};
use crate::state::AppState;
use axum::{Router, middleware::from_fn_with_state};

pub mod admin;
pub mod assignments;
pub mod auth;
pub mod common;
pub mod events;
pub mod health;
pub mod messages;
pub mod notices;
pub mod resources;
pub mod schedule;
pub mod submissions;
pub mod todos;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    let protected = Router::new()
        .nest("/assignments", assignment_routes())
        .nest("/submissions", submission_routes())
        .nest("/resources", resource_routes())
        .nest("/notices", notice_routes())
        .nest("/schedule", schedule_routes())
        .nest("/todos", todo_routes())
        .nest("/events", event_routes())
        .nest("/messages", message_routes())
        .nest("/admin", admin_routes())
        .route_layer(from_fn_with_state(app_state.clone(), require_session));

    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes(app_state.clone()))
        .merge(protected)
        .with_state(app_state)
}
