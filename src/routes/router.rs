//! Router assembly.
//!
//! API routes are registered first so they take precedence; everything
//! else falls through to the static file service that hosts the
//! single-page front end.

use axum::Router;
use tower_http::services::ServeDir;

use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Build the complete application router.
pub fn create_router(state: AppState, public_dir: &str) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(&state))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}
