//! Authentication Module
//!
//! This module handles user registration, credential checks and session
//! token issuance.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - Signed 7-day session tokens
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - POST /signup
//!     └── signin.rs   - POST /signin
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email, password and username → password hashed → user row
//!    created → `{"userId"}` returned
//! 2. **Signin**: email and password → hash verified → token returned
//! 3. **Protected routes**: the raw token in the `authorization` header is
//!    verified by [`crate::middleware::AuthUser`]
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256 JWTs that expire exactly 7 days after issuance
//! - Unknown email and wrong password produce the same 401 response

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Session token issuance and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{signin, signup};
pub use password::{PasswordError, PasswordHasher};
pub use sessions::{Claims, TokenError, TokenIssuer, TOKEN_TTL_SECS};
