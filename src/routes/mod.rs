//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Signup, signin and room creation
//! └── chat_routes.rs  - Message history
//! ```
//!
//! # Routes
//!
//! - `POST /signup` - User registration
//! - `POST /signin` - User sign in
//! - `POST /room` - Create a room (token in `authorization` header)
//! - `GET /chat/{room_id}` - Recent messages of a room
//!
//! Unknown paths fall through to a JSON 404.

/// Main router creation
pub mod router;

/// Auth and room endpoints
pub mod api_routes;

/// Chat history endpoints
pub mod chat_routes;

pub use router::create_router;
