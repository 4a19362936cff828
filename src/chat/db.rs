/**
 * Database Operations for Chat Messages
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Most messages a history query returns
pub const MAX_HISTORY: i64 = 1000;

/// A chat message row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Monotonically increasing id
    pub id: i64,
    pub room_id: i64,
    pub content: String,
}

/// Store a message in a room
pub async fn create_message(
    pool: &SqlitePool,
    room_id: i64,
    content: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO chat_messages (room_id, content)
        VALUES (?, ?)
        RETURNING id
        "#,
    )
    .bind(room_id)
    .bind(content)
    .fetch_one(pool)
    .await
}

/// Load up to `limit` messages of a room, newest first
pub async fn get_recent_messages(
    pool: &SqlitePool,
    room_id: i64,
    limit: i64,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, room_id, content
        FROM chat_messages
        WHERE room_id = ?
        ORDER BY id DESC
        LIMIT ?
        "#,
    )
    .bind(room_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::create_user;
    use crate::rooms::db::create_room;
    use crate::server::init::test_pool;
    use crate::shared::store::is_foreign_key_violation;

    async fn room(pool: &SqlitePool, slug: &str) -> i64 {
        let admin = match crate::auth::users::get_user_by_email(pool, "a@x.com").await.unwrap() {
            Some(user) => user.id,
            None => create_user(pool, "a@x.com", "A", "hash").await.unwrap(),
        };
        create_room(pool, slug, admin).await.unwrap()
    }

    #[tokio::test]
    async fn test_newest_first_and_scoped_to_room() {
        let pool = test_pool().await;
        let general = room(&pool, "general").await;
        let random = room(&pool, "random").await;

        create_message(&pool, general, "one").await.unwrap();
        create_message(&pool, random, "elsewhere").await.unwrap();
        create_message(&pool, general, "two").await.unwrap();

        let messages = get_recent_messages(&pool, general, MAX_HISTORY).await.unwrap();
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["two", "one"]);
        assert!(messages.iter().all(|m| m.room_id == general));
    }

    #[tokio::test]
    async fn test_limit() {
        let pool = test_pool().await;
        let general = room(&pool, "general").await;
        for i in 0..5 {
            create_message(&pool, general, &format!("m{i}")).await.unwrap();
        }

        let messages = get_recent_messages(&pool, general, 3).await.unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "m4");
    }

    #[tokio::test]
    async fn test_message_requires_existing_room() {
        let pool = test_pool().await;
        let err = create_message(&pool, 404, "orphan").await.unwrap_err();
        assert!(is_foreign_key_violation(&err));
    }

    #[test]
    fn test_serialized_shape() {
        let message = ChatMessage {
            id: 1,
            room_id: 2,
            content: "hi".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({ "id": 1, "roomId": 2, "content": "hi" })
        );
    }
}
