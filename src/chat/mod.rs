//! Chat Module
//!
//! Read access to room message history.
//!
//! - **`db`** - Message persistence
//! - **`handlers`** - GET /chat/{room_id}
//!
//! Messages are only read over HTTP. `db::create_message` is the store-side
//! write path.

pub mod db;
pub mod handlers;

pub use db::{ChatMessage, MAX_HISTORY};
pub use handlers::get_messages;
