//! API route table.
//!
//! # Routes
//!
//! Public:
//! - `POST /api/login` - credential verification, returns a token
//! - `POST /api/users` - registration, returns a token
//!
//! Protected (auth middleware verifies the bearer token first; the idea
//! routes additionally require the path id to match the token's user):
//! - `GET /api/me` - current user's profile
//! - `GET /api/users/{id}/ideas` - list the owner's ideas
//! - `POST /api/users/{id}/ideas` - create an idea
//! - `DELETE /api/users/{id}/ideas/{idea_id}` - delete an idea

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::auth::handlers::{get_me, login, register};
use crate::ideas::handlers::{create_idea, delete_idea, get_ideas};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Routes that require no credential.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/users", post(register))
}

/// Routes behind the auth middleware. Requests with a missing or invalid
/// token are rejected before any handler here runs.
pub fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/users/{id}/ideas", get(get_ideas).post(create_idea))
        .route("/api/users/{id}/ideas/{idea_id}", delete(delete_idea))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
}
