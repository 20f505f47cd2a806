//! Authentication and account management.
//!
//! # Module Structure
//!
//! - **`users`** - User record and store operations
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`handlers`** - HTTP handlers for register, login, and `/api/me`
//!
//! # Flow
//!
//! 1. **Register**: email uniqueness check → bcrypt hash → insert → token
//! 2. **Login**: lookup by email → bcrypt verify → token
//! 3. **Me**: verified token (via middleware) → lookup by id
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed with a per-call random salt before storage
//!   and never appear in responses or logs
//! - Tokens are stateless, signed with the process secret, and expire after
//!   24 hours; logout is a client-side token discard
//! - Unknown email and wrong password produce identical responses

/// User record and store operations
pub mod users;

/// Password hashing and verification
pub mod password;

/// Token issuance and verification
pub mod sessions;

/// HTTP handlers for account endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, register};
pub use sessions::TokenSigner;
