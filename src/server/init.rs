//! Application assembly.
//!
//! Connects the SQLite store, applies migrations, builds the shared state
//! (pool + token signer), and hands back the configured router. Unlike the
//! signing secret, which is checked before this runs, a database failure
//! here is also fatal: the service has no degraded mode.

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::auth::sessions::TokenSigner;
use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Open the SQLite pool and bring the schema up to date.
pub async fn init_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("database connected, running migrations");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("database migrations complete");

    Ok(pool)
}

/// Build the full application from configuration.
pub async fn create_app(config: &Config) -> Result<Router, sqlx::Error> {
    let db = init_database(&config.database_url).await?;

    let state = AppState {
        db,
        signer: TokenSigner::new(&config.jwt_secret),
        bcrypt_cost: config.bcrypt_cost,
    };

    Ok(create_router(state, &config.public_dir))
}
