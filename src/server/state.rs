//! Application state.
//!
//! `AppState` is the single state container handed to the axum router. It
//! holds the only two things requests share: the SQLite pool and the token
//! signer. Both are cheap to clone (`SqlitePool` is an `Arc` internally,
//! the signer's keys live behind an `Arc`) and neither is mutated after
//! startup, so handlers never contend on locks.
//!
//! `FromRef` impls let handlers extract just the piece they need instead of
//! the whole state, following axum's substate pattern.

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::TokenSigner;

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool. The store's UNIQUE constraint on
    /// `users.email` is the consistency guarantee registration relies on.
    pub db: SqlitePool,

    /// Token signer holding the process-wide secret, injected at startup.
    pub signer: TokenSigner,

    /// bcrypt work factor for newly created password hashes.
    pub bcrypt_cost: u32,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for TokenSigner {
    fn from_ref(state: &AppState) -> Self {
        state.signer.clone()
    }
}
