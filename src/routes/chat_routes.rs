use axum::{routing::get, Router};

use crate::chat::get_messages;
use crate::server::state::AppState;

/// Configure chat history routes
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/chat/{room_id}", get(get_messages))
}
