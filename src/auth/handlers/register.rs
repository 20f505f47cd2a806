//! Registration handler for POST /api/users.
//!
//! Flow: validate input → check the email is unused → hash the password on
//! the blocking pool → insert → issue a token. The store's UNIQUE constraint
//! backs the uniqueness check: if a concurrent registration wins the race
//! between check and insert, the duplicate-key failure is reported as the
//! same conflict the check would have produced, and no row or token exists
//! for the loser. Either the row is persisted and a token returned, or
//! nothing is.

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::password::hash_password_blocking;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register a new account and return a session token for it.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password, name) = request.validated()?;

    if get_user_by_email(&state.db, email).await?.is_some() {
        tracing::warn!("registration rejected: email already exists");
        return Err(ApiError::EmailExists);
    }

    let password_hash = hash_password_blocking(password.to_string(), state.bcrypt_cost).await?;

    // The From<sqlx::Error> conversion turns a unique violation here into
    // the same EmailExists conflict as the check above.
    let user = create_user(&state.db, email, name, &password_hash).await?;

    let token = state.signer.issue(user.id)?;

    tracing::info!(user_id = user.id, "user registered");

    Ok(Json(AuthResponse {
        user: UserResponse::from(&user),
        token,
    }))
}
