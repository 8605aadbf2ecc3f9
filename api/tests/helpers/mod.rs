#![allow(dead_code)]

use api::routes::routes;
use api::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use db::models::user::{Model as UserModel, Role};
use db::storage::{DatabaseStorage, MemoryStorage, NewUser, Storage};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// App over the volatile backend; the cheap default for route tests.
pub fn make_memory_app() -> (Router, AppState) {
    make_app(Arc::new(MemoryStorage::new()))
}

/// App over a migrated in-memory SQLite database.
pub async fn make_database_app() -> (Router, AppState) {
    let db = db::test_utils::setup_test_db().await;
    make_app(Arc::new(DatabaseStorage::new(db)))
}

fn make_app(storage: Arc<dyn Storage>) -> (Router, AppState) {
    let app_state = AppState::new(storage);
    let router = Router::new().nest("/api", routes(app_state.clone()));
    (router, app_state)
}

pub async fn seed_user(state: &AppState, username: &str, role: Role) -> UserModel {
    state
        .storage()
        .create_user(NewUser {
            username: username.to_string(),
            password: format!("{username}-password"),
            full_name: format!("{username} test"),
            role,
            student_number: None,
            section: None,
            department: None,
            year: None,
            semester: None,
            cgpa: None,
        })
        .await
        .expect("failed to seed user")
}

/// Issues a session for the user straight through storage, skipping the
/// login endpoint. Login itself is covered by the auth tests.
pub async fn session_token(state: &AppState, user: &UserModel) -> String {
    state
        .storage()
        .create_session(user.id, 60)
        .await
        .expect("failed to create session")
        .token
}

pub async fn seed_admin_with_token(state: &AppState) -> (UserModel, String) {
    let admin = seed_user(state, "admin", Role::Admin).await;
    let token = session_token(state, &admin).await;
    (admin, token)
}

pub async fn seed_student_with_token(state: &AppState) -> (UserModel, String) {
    let student = seed_user(state, "student", Role::Student).await;
    let token = session_token(state, &student).await;
    (student, token)
}

pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
