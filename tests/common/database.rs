//! In-memory database fixture.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Create a migrated in-memory SQLite pool.
///
/// The pool is pinned to a single connection: each connection to
/// `sqlite::memory:` gets its own private database, so a larger pool would
/// scatter test state across several of them.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}
