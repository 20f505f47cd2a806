//! Authentication middleware.
//!
//! Every protected route passes through [`auth_middleware`], which
//! extracts the session token from the `Authorization` header, verifies it,
//! and attaches the resolved user id to request extensions before any
//! handler runs. A missing header and a failed verification are both
//! rejected here with 403; no handler ever sees an unauthenticated request.
//!
//! The header carries the raw token; a `Bearer ` prefix is accepted and
//! stripped for clients that send one.
//!
//! Ownership of path-addressed resources is checked by handlers through
//! [`AuthUser::require_owner`] immediately after extraction.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::server::state::AppState;

/// The verified identity for the current request. Created per request by
/// [`auth_middleware`], discarded when the request ends.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub user_id: i64,
}

impl AuthUser {
    /// Fail with `Forbidden` unless the authenticated user is the owner
    /// addressed by the path. Token validity alone never grants access to
    /// another user's resources.
    pub fn require_owner(&self, path_user_id: i64) -> Result<(), ApiError> {
        if self.user_id != path_user_id {
            tracing::warn!(
                authenticated = self.user_id,
                addressed = path_user_id,
                "ownership check failed"
            );
            return Err(ApiError::Forbidden);
        }
        Ok(())
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only reachable on routes layered with auth_middleware; absence
        // means a route was wired up without it.
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or(ApiError::MissingToken)
    }
}

/// Verify the request's bearer token and attach the user id.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::MissingToken)?;

    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    let user_id = state.signer.verify(token)?;

    request.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_check_accepts_self() {
        let auth = AuthUser { user_id: 1 };
        assert!(auth.require_owner(1).is_ok());
    }

    #[test]
    fn owner_check_rejects_other_users() {
        let auth = AuthUser { user_id: 1 };
        assert!(matches!(auth.require_owner(2), Err(ApiError::Forbidden)));
    }
}
