use std::sync::Arc;

use auth::AccessError;
use auth::Authenticator;
use auth::RequiredRoles;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;

/// Per-route access policy evaluated before any handler logic.
///
/// Layered with `axum::middleware::from_fn_with_state(guard, require_access)`.
/// On success the authenticated [`auth::Principal`] is stored in the request
/// extensions for the handler to read.
#[derive(Clone)]
pub struct AccessGuard {
    authenticator: Arc<Authenticator>,
    required: RequiredRoles,
}

impl AccessGuard {
    pub fn new(authenticator: Arc<Authenticator>, required: RequiredRoles) -> Self {
        Self {
            authenticator,
            required,
        }
    }
}

/// Middleware that validates the bearer token and enforces the guard's roles.
pub async fn require_access(
    State(guard): State<AccessGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let principal = guard
        .authenticator
        .admit(authorization, &guard.required)
        .map_err(|e| {
            match e {
                AccessError::MissingToken => {
                    tracing::debug!(uri = %req.uri(), "Request without bearer token")
                }
                AccessError::InvalidToken(reason) => {
                    tracing::warn!(uri = %req.uri(), reason = %reason, "Token rejected")
                }
                AccessError::Forbidden => {
                    tracing::warn!(uri = %req.uri(), "Insufficient role")
                }
            }
            ApiError::from(e)
        })?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
