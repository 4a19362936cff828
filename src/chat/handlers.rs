/**
 * Chat History Handler
 *
 * GET /chat/{room_id} returns the room's most recent messages, newest first,
 * capped at `MAX_HISTORY`. A room with no messages (or no row at all) yields
 * an empty list.
 */

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::chat::db::{get_recent_messages, ChatMessage, MAX_HISTORY};
use crate::error::ApiError;

/// Response body for message history
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessagesResponse {
    pub messages: Vec<ChatMessage>,
}

/// Get messages handler
///
/// # Errors
///
/// * `400 Bad Request` - `room_id` is not an integer or not valid UTF-8; the
///   store is not queried
/// * `500 Internal Server Error` - Store failure
pub async fn get_messages(
    State(pool): State<SqlitePool>,
    room_id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let Path(room_id) = room_id.map_err(|rejection| {
        tracing::warn!("Rejected room id: {}", rejection.body_text());
        ApiError::invalid_input("Invalid room id")
    })?;

    let room_id: i64 = room_id.parse().map_err(|_| {
        tracing::warn!("Invalid room id: {}", room_id);
        ApiError::invalid_input("Invalid room id")
    })?;

    let messages = get_recent_messages(&pool, room_id, MAX_HISTORY)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get messages for room {}: {:?}", room_id, e);
            ApiError::from(e)
        })?;

    tracing::debug!("Returning {} messages for room {}", messages.len(), room_id);

    Ok(Json(MessagesResponse { messages }))
}
