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

use delete::delete_todo;
use get::list_todos;
use post::create_todo;
use put::update_todo;

pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos))
        .route("/", post(create_todo))
        .route(
            "/{todo_id}",
            put(update_todo)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(EntityKind::Todo, Action::Update))),
        )
        .route(
            "/{todo_id}",
            delete(delete_todo)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(EntityKind::Todo, Action::Delete))),
        )
}
