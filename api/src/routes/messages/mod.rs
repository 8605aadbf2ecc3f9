use crate::auth::guards::enforce_policy;
use crate::auth::policy::{Action, EntityKind, PolicyRule};
use crate::state::AppState;
use axum::middleware::from_fn;
use axum::routing::{get, post, put};
use axum::{Extension, Router};

pub mod common;
pub mod get;
pub mod post;
pub mod put;

use get::list_messages;
use post::create_message;
use put::mark_message_read;

pub fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_messages))
        .route("/", post(create_message))
        .route(
            "/{message_id}/read",
            put(mark_message_read)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::Message,
                    Action::Update,
                ))),
        )
}
