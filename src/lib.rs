//! ideabox, a small idea journal with a REST backend.
//!
//! The backend exposes account registration, login, and per-user CRUD on
//! idea records. Its core is the authentication and session-authorization
//! subsystem: bcrypt credential storage, stateless 24-hour JWT sessions,
//! and per-request ownership enforcement.
//!
//! # Module Structure
//!
//! - **`auth`** - Credential store, password hashing, token issuance, and
//!   the register/login/me handlers
//! - **`ideas`** - Idea records and their owner-scoped CRUD handlers
//! - **`middleware`** - Bearer-token verification in front of protected
//!   routes
//! - **`routes`** - Route tables and router assembly
//! - **`server`** - Configuration, shared state, and app construction
//! - **`error`** - Error taxonomy and HTTP mapping
//!
//! # Security Model
//!
//! - Passwords are bcrypt-hashed (configurable cost, default 10) with a
//!   fresh salt per hash; hashes never leave the store layer
//! - Session tokens are HS256 JWTs carrying only the user id and a 24-hour
//!   expiry; the signing secret is injected at startup and its absence is
//!   a fatal startup error
//! - Tokens are not revocable; logout is a client-side discard
//! - Every resource route checks that the path-addressed owner equals the
//!   token's user

/// Authentication: users, passwords, sessions, account handlers
pub mod auth;

/// Error taxonomy and HTTP mapping
pub mod error;

/// Idea records and handlers
pub mod ideas;

/// Request middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration, state, and assembly
pub mod server;

pub use error::ApiError;
pub use server::{create_app, AppState, Config};
