//! API Error Module
//!
//! This module defines the error taxonomy returned by HTTP handlers and its
//! mapping onto status codes and JSON bodies.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and constructors
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Error Types
//!
//! | Variant        | Status    | Raised when                                   |
//! |----------------|-----------|-----------------------------------------------|
//! | `InvalidInput` | 400       | payload or path fails shape validation        |
//! | `Conflict`     | 409 / 400 | email (409) or room slug (400) already taken  |
//! | `Unauthorized` | 401       | bad credentials, missing token, unknown user  |
//! | `Forbidden`    | 403       | token present but invalid or expired          |
//! | `Internal`     | 500       | unexpected store, hashing or signing failure  |
//!
//! Every error is rendered as `{"message": "..."}`. Internal details are
//! logged and never sent to the client.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{ApiError, ConflictResource};
