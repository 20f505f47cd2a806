//! Login handler for POST /api/login.
//!
//! Unknown email and wrong password take different code paths but converge
//! on the identical `InvalidCredentials` response, so a client cannot probe
//! which addresses have accounts. Password verification runs on the
//! blocking pool; bcrypt's comparison is constant-time with respect to the
//! candidate.

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::password::verify_password_blocking;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Verify credentials and return a fresh session token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = request.validated()?;

    let user = get_user_by_email(&state.db, email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let valid = verify_password_blocking(password.to_string(), user.password_hash.clone()).await?;
    if !valid {
        tracing::warn!(user_id = user.id, "login rejected: password mismatch");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.signer.issue(user.id)?;

    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(AuthResponse {
        user: UserResponse::from(&user),
        token,
    }))
}
