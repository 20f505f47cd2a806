//! Idea records: the per-user journal entries behind the authenticated
//! CRUD endpoints.
//!
//! # Module Structure
//!
//! - **`db`** - Idea row type and store operations
//! - **`handlers`** - HTTP handlers for list, create, and delete
//!
//! All routes here are ownership-scoped: the path's user id must match the
//! authenticated user, and deletes are additionally scoped to the owner in
//! the store itself.

/// Idea row and store operations
pub mod db;

/// HTTP handlers for idea endpoints
pub mod handlers;

pub use db::Idea;
pub use handlers::{create_idea, delete_idea, get_ideas};
