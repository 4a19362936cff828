//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`signin`** - POST /signin - Exchange credentials for a token

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

pub use signin::signin;
pub use signup::signup;
pub use types::{SigninRequest, SigninResponse, SignupRequest, SignupResponse};
