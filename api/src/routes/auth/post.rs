use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::TypedHeader;
use common::config;
use headers::{Authorization, authorization::Bearer};
use validator::Validate;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::auth::common::{LoginRequest, RegisterRequest, SessionResponse};
use crate::routes::common::{storage_error_response, validation_error_response};
use crate::state::AppState;
use axum::extract::State;
use db::models::user::Role;
use db::storage::NewUser;

/// POST /auth/register
///
/// Creates a student account and issues a session in one step.
///
/// Always registers with the student role: admin accounts are provisioned
/// through the roster surface or the seeder.
///
/// ### Responses
/// - `201 Created` with the account and a session token
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` when the username is taken
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return validation_error_response(&validation_errors);
    }

    let input = NewUser {
        username: req.username,
        password: req.password,
        full_name: req.full_name,
        role: Role::Student,
        student_number: req.student_number,
        section: req.section,
        department: req.department,
        year: req.year,
        semester: req.semester,
        cgpa: req.cgpa,
    };

    let user = match app_state.storage().create_user(input).await {
        Ok(user) => user,
        Err(err) => return storage_error_response(err),
    };

    match app_state
        .storage()
        .create_session(user.id, config::session_ttl_minutes())
        .await
    {
        Ok(session) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SessionResponse::new(user, session),
                "User registered successfully",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}

/// POST /auth/login
///
/// Verifies credentials and issues a fresh session token. Unknown usernames
/// and wrong passwords are indistinguishable to the caller.
pub async fn login(State(app_state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    let user = match app_state.storage().get_user_by_username(&req.username).await {
        Ok(Some(user)) => user,
        Ok(None) => return invalid_credentials(&req.username),
        Err(err) => return storage_error_response(err),
    };

    if !user.verify_password(&req.password) {
        return invalid_credentials(&req.username);
    }

    match app_state
        .storage()
        .create_session(user.id, config::session_ttl_minutes())
        .await
    {
        Ok(session) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SessionResponse::new(user, session),
                "Login successful",
            )),
        )
            .into_response(),
        Err(err) => storage_error_response(err),
    }
}

fn invalid_credentials(username: &str) -> Response {
    tracing::info!(username, "rejected login with invalid credentials");
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::<Empty>::error("Invalid username or password")),
    )
        .into_response()
}

/// POST /auth/logout
///
/// Revokes the presented session token. The token stops resolving
/// immediately; other sessions of the same user are unaffected.
pub async fn logout(
    State(app_state): State<AppState>,
    Extension(AuthUser(identity)): Extension<AuthUser>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Response {
    match app_state.storage().revoke_session(bearer.token()).await {
        Ok(_) => {
            tracing::info!(user_id = identity.user_id, "session revoked");
            (
                StatusCode::OK,
                Json(ApiResponse::success(Empty, "Logged out successfully")),
            )
                .into_response()
        }
        Err(err) => storage_error_response(err),
    }
}
