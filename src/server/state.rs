/**
 * Application State Management
 *
 * `AppState` is the only state shared between requests. None of it is
 * mutable: the pool is internally synchronised, the token keys and hasher
 * cost are fixed at startup.
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State(pool): State<SqlitePool>`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::password::PasswordHasher;
use crate::auth::sessions::TokenIssuer;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Signs and verifies session tokens
    pub tokens: TokenIssuer,

    /// Password hashing settings
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: TokenIssuer, hasher: PasswordHasher) -> Self {
        Self {
            db_pool,
            tokens,
            hasher,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}
