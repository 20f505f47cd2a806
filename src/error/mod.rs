//! API Error Types
//!
//! This module defines the error taxonomy for the backend and its mapping to
//! HTTP responses.
//!
//! # Error Categories
//!
//! - Validation failures (missing/empty request fields): 400
//! - Duplicate email on registration: 403
//! - Authentication failures (bad credentials, missing/invalid token,
//!   ownership mismatch): 403
//! - Internal failures (store, hashing, token signing): 500, logged
//!   server-side with full detail and surfaced to the client as a generic
//!   message

/// Error enum and status-code mapping
pub mod types;

/// Conversions into HTTP responses and from library errors
pub mod conversion;

pub use types::ApiError;
