//! Shared test fixtures.

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use ideabox::auth::sessions::TokenSigner;
use ideabox::routes::create_router;
use ideabox::server::state::AppState;
use sqlx::SqlitePool;

/// Secret used by every test signer. Long enough to satisfy the startup
/// length check, meaningless otherwise.
pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret-test";

/// Minimum bcrypt cost keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;

/// A full application instance over an in-memory database, plus direct
/// handles to the pool and signer for assertions that bypass HTTP.
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub signer: TokenSigner,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = database::test_pool().await;
        let signer = TokenSigner::new(TEST_SECRET);

        let state = AppState {
            db: pool.clone(),
            signer: signer.clone(),
            bcrypt_cost: TEST_BCRYPT_COST,
        };

        let server = TestServer::new(create_router(state, "public")).unwrap();

        Self {
            server,
            pool,
            signer,
        }
    }
}
