//! Conversions for [`ApiError`].
//!
//! The `IntoResponse` impl is the single point where errors become HTTP
//! responses, so status codes and body shape stay consistent across every
//! handler. Internal errors are logged here with full detail; the response
//! body never carries stack traces, hashes, or secrets.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use super::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::warn!(status = %status, "request rejected: {}", self.message());
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        // A duplicate-key failure on insert means the pre-insert uniqueness
        // check lost a race; report it exactly like the check itself.
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::EmailExists;
            }
        }
        Self::internal(err)
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(err)
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::internal(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(err)
    }
}
