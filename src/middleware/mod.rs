//! Request middleware.

/// Bearer-token authentication and ownership checks
pub mod auth;

pub use auth::{auth_middleware, AuthUser};
