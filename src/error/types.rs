//! Backend error types.
//!
//! Each variant maps to exactly one HTTP status code via [`ApiError::status_code`].
//! The three token failures (missing, malformed/bad signature, expired) are
//! deliberately collapsed into two coarse variants so responses never reveal
//! which verification step rejected the request. Likewise, `InvalidCredentials`
//! is returned both for an unknown email and for a wrong password.

use axum::http::StatusCode;
use thiserror::Error;

/// All errors a request handler can surface to a client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or empty.
    #[error("{0}")]
    Validation(&'static str),

    /// Registration attempted with an email that already has an account.
    ///
    /// 403 on the wire for compatibility with the documented interface,
    /// although 409 would be the conventional code.
    #[error("Email address already exists")]
    EmailExists,

    /// Login failed: unknown email or wrong password. The two cases are
    /// indistinguishable to the client.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No Authorization header was presented on a protected route.
    #[error("Missing authorization token")]
    MissingToken,

    /// The presented token is malformed, has a bad signature, or has expired.
    #[error("Invalid authorization token")]
    InvalidToken,

    /// The authenticated user does not own the path-addressed resource.
    #[error("Forbidden")]
    Forbidden,

    /// Store, hashing, or signing failure. Logged server-side; the client
    /// only sees a generic message.
    #[error("Internal server error")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::EmailExists
            | Self::InvalidCredentials
            | Self::MissingToken
            | Self::InvalidToken
            | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message included in the response body. Internal errors are opaque.
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Wrap any infrastructure failure as an opaque internal error.
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Box::new(err))
    }
}
