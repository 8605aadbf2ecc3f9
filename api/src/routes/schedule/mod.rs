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

use get::list_schedule;
use post::create_schedule_slot;
use put::update_schedule_slot;

pub fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedule))
        .route(
            "/",
            post(create_schedule_slot)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::ScheduleSlot,
                    Action::Create,
                ))),
        )
        .route(
            "/{slot_id}",
            put(update_schedule_slot)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(
                    EntityKind::ScheduleSlot,
                    Action::Update,
                ))),
        )
}
