//! Common test utilities and helpers
//!
//! - Database fixtures (migrated in-memory SQLite)
//! - A `TestServer` wired to the real router
//! - Signup/signin helpers that go through the HTTP surface

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

#[allow(unused_imports)]
pub use auth_helpers::*;
#[allow(unused_imports)]
pub use database::*;

use axum_test::TestServer;
use chatroom::auth::{PasswordHasher, TokenIssuer};
use chatroom::{create_app_with_state, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

/// A running test server plus the state behind it
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

/// Build the full router over a fresh in-memory database
pub async fn spawn_app() -> TestApp {
    let pool = create_test_pool().await;
    let state = AppState::new(
        pool,
        TokenIssuer::new(TEST_SECRET),
        PasswordHasher::new(PasswordHasher::MIN_COST),
    );
    let server = TestServer::new(create_app_with_state(state.clone()))
        .expect("Failed to create test server");
    TestApp { server, state }
}
