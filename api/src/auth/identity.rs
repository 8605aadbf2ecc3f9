use db::models::user::{Model as UserModel, Role};

/// The identity a session token resolved to.
///
/// Unlike a claims object this carries no expiry: the session row is the
/// source of truth and was checked during resolution.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl From<&UserModel> for Identity {
    fn from(user: &UserModel) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Request-extension wrapper around the resolved identity.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.0.role == Role::Admin
    }
}
