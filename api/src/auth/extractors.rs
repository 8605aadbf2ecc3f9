use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::TypedHeader;
use common::config;
use headers::{Authorization, authorization::Bearer};

use crate::auth::identity::{AuthUser, Identity};
use crate::state::AppState;

/// Implements extraction of `AuthUser` from request headers.
///
/// Checks for a Bearer token in the `Authorization` header and resolves it
/// through the session directory. With sliding sessions enabled, a
/// successful resolution pushes the session expiry out by the configured
/// TTL.
///
/// # Errors
/// - `401 Unauthorized` if the header is missing or the token is unknown,
///   revoked or expired.
/// - `500 Internal Server Error` if the session lookup itself fails; an
///   unreachable backend is not the same as a bad token.
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    (
                        StatusCode::UNAUTHORIZED,
                        "Missing or invalid Authorization header",
                    )
                })?;

        let extend = config::session_sliding().then(config::session_ttl_minutes);

        let session = match state
            .storage()
            .resolve_session(bearer.token(), extend)
            .await
        {
            Ok(Some(session)) => session,
            Ok(None) => return Err((StatusCode::UNAUTHORIZED, "Invalid or expired session token")),
            Err(_) => return Err((StatusCode::INTERNAL_SERVER_ERROR, "Session lookup failed")),
        };

        match state.storage().get_user(session.user_id).await {
            Ok(Some(user)) => Ok(AuthUser(Identity::from(&user))),
            Ok(None) => Err((StatusCode::UNAUTHORIZED, "Session user no longer exists")),
            Err(_) => Err((StatusCode::INTERNAL_SERVER_ERROR, "Session lookup failed")),
        }
    }
}
