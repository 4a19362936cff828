//! Rooms Module
//!
//! Chat rooms identified by a unique slug and owned by the user who created
//! them.
//!
//! - **`db`** - Room persistence
//! - **`types`** - Request and response bodies
//! - **`handlers`** - POST /room

pub mod db;
pub mod handlers;
pub mod types;

pub use db::Room;
pub use handlers::create_room;
