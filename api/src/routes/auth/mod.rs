use crate::auth::guards::require_session;
use crate::state::AppState;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

pub mod common;
pub mod get;
pub mod post;

use get::me;
use post::{login, logout, register};

/// `/auth` route group. Login and register are the only public mutations in
/// the API; logout and `/me` require a live session.
pub fn auth_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route(
            "/logout",
            post(logout).route_layer(from_fn_with_state(app_state.clone(), require_session)),
        )
        .route(
            "/me",
            get(me).route_layer(from_fn_with_state(app_state, require_session)),
        )
}
