//! Request/response DTOs for the `/auth` route group.

use db::models::{session::Model as SessionModel, user::Model as UserModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static::lazy_static! {
    pub static ref USERNAME_REGEX: regex::Regex =
        regex::Regex::new("^[a-zA-Z0-9_.-]{3,32}$").unwrap();
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "Username must be 3-32 characters (letters, digits, '.', '_' or '-')"
    ))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 120, message = "Full name must not be empty"))]
    pub full_name: String,

    pub student_number: Option<String>,
    pub section: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<String>,
    pub cgpa: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Returned by register and login: the account plus a fresh session token.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserModel,
    pub token: String,
    pub expires_at: String,
}

impl SessionResponse {
    pub fn new(user: UserModel, session: SessionModel) -> Self {
        Self {
            user,
            token: session.token,
            expires_at: session.expires_at.to_rfc3339(),
        }
    }
}
