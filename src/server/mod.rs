//! Server setup: configuration loading, shared state, and app assembly.

/// Environment-driven configuration
pub mod config;

/// Shared application state
pub mod state;

/// Application assembly (database, signer, router)
pub mod init;

pub use config::Config;
pub use init::create_app;
pub use state::AppState;
