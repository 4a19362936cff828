//! Shared Module
//!
//! Pieces used by every feature module.
//!
//! - **`validation`** - The `Validate` trait, field rules, and the
//!   `ValidJson` extractor that applies them
//! - **`store`** - Classification of constraint violations reported by the
//!   database

pub mod store;
pub mod validation;

pub use validation::{ValidJson, Validate, ValidationError};
