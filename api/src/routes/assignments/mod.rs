use crate::auth::guards::enforce_policy;
use crate::auth::policy::{Action, EntityKind, PolicyRule};
use crate::state::AppState;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use axum::{Extension, Router};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_assignment;
use get::{get_assignment, list_assignments};
use post::create_assignment;
use put::update_assignment;

pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments))
        .route("/{assignment_id}", get(get_assignment))
        .route(
            "/",
            post(create_assignment)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::Assignment,
                    Action::Create,
                ))),
        )
        .route(
            "/{assignment_id}",
            put(update_assignment)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::Assignment,
                    Action::Update,
                ))),
        )
        .route(
            "/{assignment_id}",
            delete(delete_assignment)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::Assignment,
                    Action::Delete,
                ))),
        )
}
