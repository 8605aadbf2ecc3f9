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

use get::list_students;
use post::create_student;
use put::update_student;

/// `/admin` route group: the student-roster surface. Every route maps to
/// the `User` entity kind in the policy table, which is admin-only across
/// the board.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(list_students)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(EntityKind::User, Action::List))),
        )
        .route(
            "/student-ids",
            post(create_student)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(EntityKind::User, Action::Create))),
        )
        .route(
            "/student-ids/{user_id}",
            put(update_student)
                .route_layer(from_fn(enforce_policy))
                .route_layer(Extension(PolicyRule::new(EntityKind::User, Action::Update))),
        )
}
