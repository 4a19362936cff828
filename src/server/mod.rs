//! Server Module
//!
//! Everything needed to turn configuration into a running Axum router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Database setup and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig::from_env` (fails fast without `JWT_SECRET`)
//! 2. **Database**: connect the SQLite pool and run embedded migrations
//! 3. **State**: pool, token issuer and password hasher in one `AppState`
//! 4. **Router**: routes, body limit and JSON 404 fallback

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_app_with_state, InitError};
pub use state::AppState;
