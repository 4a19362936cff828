/**
 * Database Operations for Rooms
 */

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

/// A room row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    /// Unique, human-readable name
    pub slug: String,
    /// The creating user
    pub admin_id: i64,
    pub created_at: NaiveDateTime,
}

/// Create a room owned by `admin_id`
///
/// # Returns
/// The new room id. A taken slug is a unique violation; an `admin_id` with no
/// matching user is a foreign key violation.
pub async fn create_room(pool: &SqlitePool, slug: &str, admin_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO rooms (slug, admin_id)
        VALUES (?, ?)
        RETURNING id
        "#,
    )
    .bind(slug)
    .bind(admin_id)
    .fetch_one(pool)
    .await
}

/// Get a room by slug
pub async fn get_room_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        SELECT id, slug, admin_id, created_at
        FROM rooms
        WHERE slug = ?
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}
