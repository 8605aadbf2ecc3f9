use crate::auth::guards::enforce_policy;
use crate::auth::policy::{Action, EntityKind, PolicyRule};
use crate::state::AppState;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post};
use axum::{Extension, Router};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

use delete::delete_resource;
use get::{get_resource, list_resources};
use post::create_resource;

pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_resources))
        .route("/{resource_id}", get(get_resource))
        .route(
            "/",
            post(create_resource)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::Resource,
                    Action::Create,
                ))),
        )
        .route(
            "/{resource_id}",
            delete(delete_resource)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::Resource,
                    Action::Delete,
                ))),
        )
}
