/**
 * Signup Handler
 *
 * POST /signup
 *
 * 1. Validate `{email, password, username}`
 * 2. Hash the password with bcrypt
 * 3. Insert the user; a taken email is a 409
 * 4. Return `201 {"userId": id}`
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::auth::password::PasswordHasher;
use crate::auth::users::create_user;
use crate::error::{ApiError, ConflictResource};
use crate::shared::store::is_unique_violation;
use crate::shared::validation::ValidJson;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or a field failed validation
/// * `409 Conflict` - A user with this email already exists
/// * `500 Internal Server Error` - Hashing or the insert failed
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "a@x.com", "password": "p1", "username": "A"}
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 201 Created
///
/// {"userId": 1}
/// ```
pub async fn signup(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    ValidJson(request): ValidJson<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    tracing::info!("Signup request for email: {}", request.email);

    let password_hash = hasher.hash(&request.password).await?;

    let user_id = create_user(&pool, &request.email, &request.username, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email already registered: {}", request.email);
                ApiError::conflict(
                    ConflictResource::UserEmail,
                    "User already exists with this email",
                )
            } else {
                ApiError::from(e)
            }
        })?;

    tracing::info!("User created successfully: {} ({})", user_id, request.email);

    Ok((StatusCode::CREATED, Json(SignupResponse { user_id })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::init::test_pool;

    fn request(email: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: "p1".to_string(),
            username: "A".to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_success() {
        let pool = test_pool().await;
        let hasher = PasswordHasher::new(PasswordHasher::MIN_COST);

        let (status, Json(body)) = signup(
            State(pool.clone()),
            State(hasher),
            ValidJson(request("a@x.com")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.user_id, 1);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let pool = test_pool().await;
        let hasher = PasswordHasher::new(PasswordHasher::MIN_COST);

        let _ = signup(State(pool.clone()), State(hasher), ValidJson(request("a@x.com")))
            .await
            .unwrap();
        let err = signup(State(pool.clone()), State(hasher), ValidJson(request("a@x.com")))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_signup_stores_hash_not_password() {
        use crate::auth::users::get_user_by_email;

        let pool = test_pool().await;
        let hasher = PasswordHasher::new(PasswordHasher::MIN_COST);
        let _ = signup(State(pool.clone()), State(hasher), ValidJson(request("a@x.com")))
            .await
            .unwrap();

        let user = get_user_by_email(&pool, "a@x.com").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "p1");
        assert!(hasher.verify("p1", &user.password_hash).await.unwrap());
    }
}
