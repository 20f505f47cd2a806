//! HTTP handlers for account endpoints.
//!
//! - **`register`** - POST /api/users - account creation
//! - **`login`** - POST /api/login - credential verification
//! - **`get_me`** - GET /api/me - current user (requires auth middleware)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current-user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
