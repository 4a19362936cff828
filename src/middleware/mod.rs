//! Middleware Module
//!
//! Request processing that runs before handler logic.
//!
//! - **`auth`** - The auth gate: verifies the `authorization` token and yields
//!   an [`AuthUser`] that protected handlers take as an argument

pub mod auth;

pub use auth::{authenticate, authenticate_at, AuthUser};
