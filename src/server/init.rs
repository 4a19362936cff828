/**
 * Server Initialization
 *
 * Connects the database, runs migrations, and assembles the router.
 * Unlike request errors, failures here abort startup.
 */

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::auth::password::PasswordHasher;
use crate::auth::sessions::TokenIssuer;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

const MAX_DB_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create the Axum application from configuration
pub async fn create_app(config: &ServerConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing chatroom backend server");

    let db_pool = connect_database(&config.database_url).await?;
    let app_state = AppState::new(
        db_pool,
        TokenIssuer::new(&config.jwt_secret),
        PasswordHasher::new(config.bcrypt_cost),
    );

    Ok(create_app_with_state(app_state))
}

/// Create the Axum application around an existing state
pub fn create_app_with_state(app_state: AppState) -> Router {
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}

/// Open the SQLite pool and bring the schema up to date
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, InitError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply the embedded migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InitError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Migrated in-memory database for unit tests
///
/// A single connection that never expires, since every SQLite in-memory
/// connection is its own database.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
