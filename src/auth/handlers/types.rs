//! Request and response types for account endpoints.
//!
//! Request fields are `Option<String>` so a missing field deserializes
//! instead of failing in the extractor; handlers then report absent or
//! empty fields as a 400 validation error, preserving the documented wire
//! contract.

use serde::{Deserialize, Serialize};

use crate::auth::users::User;
use crate::error::ApiError;

/// Registration request: all three fields required and non-empty.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl RegisterRequest {
    /// Extract the required fields or fail with a validation error.
    pub fn validated(&self) -> Result<(&str, &str, &str), ApiError> {
        Ok((
            required(&self.email, "email is required")?,
            required(&self.password, "password is required")?,
            required(&self.name, "name is required")?,
        ))
    }
}

/// Login request: both fields required and non-empty.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Extract the required fields or fail with a validation error.
    pub fn validated(&self) -> Result<(&str, &str), ApiError> {
        Ok((
            required(&self.email, "email is required")?,
            required(&self.password, "password is required")?,
        ))
    }
}

fn required<'a>(field: &'a Option<String>, message: &'static str) -> Result<&'a str, ApiError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::Validation(message)),
    }
}

/// User information safe to return to clients. Never carries the password
/// hash or the internal role.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Returned by register and login: the session token plus the user it
/// authenticates.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Returned by GET /api/me.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}
