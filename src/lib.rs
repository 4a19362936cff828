//! Chatroom - Main Library
//!
//! Chatroom is a small authenticated chat-room backend built on Axum and
//! SQLite. Users sign up and sign in, create rooms, and read the recent
//! message history of a room.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state and app construction
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, session tokens, signup/signin
//! - **`middleware`** - The auth gate (`AuthUser` extractor)
//! - **`rooms`** - Room persistence and the create-room handler
//! - **`chat`** - Chat message persistence and the history handler
//! - **`shared`** - Request validation shared by all handlers
//! - **`error`** - The API error taxonomy and its HTTP mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use chatroom::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Endpoints
//!
//! - `POST /signup` - Register a user
//! - `POST /signin` - Exchange credentials for a 7-day token
//! - `POST /room` - Create a room (requires the `authorization` header)
//! - `GET /chat/{room_id}` - Up to 1000 most recent messages, newest first

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request extractors that guard protected routes
pub mod middleware;

/// Chat rooms
pub mod rooms;

/// Chat message history
pub mod chat;

/// Validation shared by request types
pub mod shared;

/// API error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, create_app_with_state, AppState};
