use crate::auth::guards::enforce_policy;
use crate::auth::policy::{Action, EntityKind, PolicyRule};
use crate::state::AppState;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::{Extension, Router};

pub mod common;
pub mod get;
pub mod post;

use get::{get_notice, list_notices};
use post::create_notice;

pub fn notice_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notices))
        .route("/{notice_id}", get(get_notice))
        .route(
            "/",
            post(create_notice)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::Notice,
                    Action::Create,
                ))),
        )
}
