use crate::auth::identity::AuthUser;
use crate::auth::policy::{self, Access, PolicyRule};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user::Role;

#[derive(serde::Serialize, Default)]
pub struct Empty;

fn forbidden(msg: &str) -> (StatusCode, Json<ApiResponse<Empty>>) {
    (StatusCode::FORBIDDEN, Json(ApiResponse::error(msg)))
}

/// Helper to extract and validate the session user from the request, then
/// insert the identity back into the request extensions for handlers.
async fn extract_and_insert_identity(
    state: &AppState,
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();
    match AuthUser::from_request_parts(&mut parts, state).await {
        Ok(user) => {
            let mut req = Request::from_parts(parts, body);
            req.extensions_mut().insert(user.clone());
            Ok((req, user))
        }
        Err((status, msg)) => {
            if status == StatusCode::UNAUTHORIZED {
                tracing::info!(path = %parts.uri.path(), "{msg}");
            }
            Err((status, Json(ApiResponse::error(msg))))
        }
    }
}

/// Authentication gate for the protected subtree.
///
/// Rejects with 401 before any entity-store access; on success the resolved
/// [`AuthUser`] is available to downstream middleware and handlers as a
/// request extension.
pub async fn require_session(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, _user) = extract_and_insert_identity(&app_state, req).await?;

    Ok(next.run(req).await)
}

/// Role gate for routes carrying a [`PolicyRule`] extension.
///
/// Runs after [`require_session`] and before the request body is parsed, so
/// an underprivileged caller gets 403 regardless of payload validity.
/// Ownership-level rules pass here and are settled by the handler against
/// the loaded record.
pub async fn enforce_policy(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let rule = req.extensions().get::<PolicyRule>().copied().ok_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error("Route is missing its access rule")),
    ))?;

    let user = req.extensions().get::<AuthUser>().cloned().ok_or((
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::error("Authentication required")),
    ))?;

    match policy::access_for(rule.kind, rule.action) {
        Access::Authenticated | Access::Owner => {}
        Access::Admin => {
            if user.0.role != Role::Admin {
                tracing::info!(
                    user_id = user.0.user_id,
                    rule = ?rule,
                    "denied admin-only operation"
                );
                return Err(forbidden("Admin access required"));
            }
        }
        Access::Student => {
            if user.0.role != Role::Student {
                return Err(forbidden("Student access required"));
            }
        }
    }

    Ok(next.run(req).await)
}
