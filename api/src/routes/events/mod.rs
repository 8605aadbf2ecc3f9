use crate::auth::guards::enforce_policy;
use crate::auth::policy::{Action, EntityKind, PolicyRule};
use crate::state::AppState;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::{Extension, Router};

pub mod common;
pub mod get;
pub mod post;

use get::list_events;
use post::create_event;

pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route(
            "/",
            post(create_event)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::Event,
                    Action::Create,
                ))),
        )
}
