/**
 * Chatroom Server Entry Point
 *
 * Loads `.env`, initialises tracing, validates configuration, and serves the
 * Axum app. Missing `JWT_SECRET` stops the process before it binds.
 */

use chatroom::server::{config::ServerConfig, init::create_app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
    })?;
    tracing::info!("Loaded configuration: {:?}", config);

    let app = create_app(&config).await.inspect_err(|e| {
        tracing::error!("Server initialization failed: {}", e);
    })?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("webserver running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
