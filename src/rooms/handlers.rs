/**
 * Room Handlers
 *
 * POST /room creates a room whose slug is the requested name and whose admin
 * is the authenticated caller.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::error::{ApiError, ConflictResource};
use crate::middleware::AuthUser;
use crate::rooms::db;
use crate::rooms::types::{CreateRoomRequest, CreateRoomResponse};
use crate::shared::store::{is_foreign_key_violation, is_unique_violation};
use crate::shared::validation::ValidJson;

/// Create room handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid body, or a room with this name exists
/// * `401 Unauthorized` - No token, or the token names a user that doesn't exist
/// * `403 Forbidden` - The token does not verify
/// * `500 Internal Server Error` - Store failure
pub async fn create_room(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    ValidJson(request): ValidJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<CreateRoomResponse>), ApiError> {
    tracing::info!("Create room '{}' for user {}", request.name, user.user_id);

    let room_id = db::create_room(&pool, &request.name, user.user_id)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Room already exists: {}", request.name);
                ApiError::conflict(
                    ConflictResource::RoomSlug,
                    "Room already exists with this name",
                )
            } else if is_foreign_key_violation(&e) {
                tracing::warn!("Token names unknown user: {}", user.user_id);
                ApiError::unauthorized("Unauthorized: Unknown user")
            } else {
                ApiError::from(e)
            }
        })?;

    tracing::info!("Room created: {} ({})", room_id, request.name);

    Ok((StatusCode::CREATED, Json(CreateRoomResponse { room_id })))
}
