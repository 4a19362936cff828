/**
 * User Model and Database Operations
 */

use std::fmt;

use sqlx::SqlitePool;

/// A user row
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Server-generated id
    pub id: i64,
    /// Unique email address
    pub email: String,
    /// Display name chosen at signup
    pub name: String,
    /// bcrypt hash of the password
    pub password_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Create a new user
///
/// # Returns
/// The id of the new row. A duplicate email surfaces as a unique-violation
/// `sqlx::Error::Database`; see [`crate::shared::store::is_unique_violation`].
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    name: &str,
    password_hash: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO users (email, name, password_hash)
        VALUES (?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Get user by email
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
