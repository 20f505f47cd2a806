//! Current-user handler for GET /api/me.
//!
//! The route sits behind the auth middleware, so by the time this runs the
//! token has been verified and the user id sits in request extensions. The
//! row is fetched fresh: a token for a since-deleted user is treated like
//! any other invalid credential.

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{MeResponse, UserResponse};
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Return the authenticated user's own profile.
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = get_user_by_id(&state.db, auth.user_id)
        .await?
        .ok_or(ApiError::InvalidToken)?;

    Ok(Json(MeResponse {
        user: UserResponse::from(&user),
    }))
}
