/**
 * Signin Handler
 *
 * POST /signin
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue a 7-day session token
 *
 * An unknown email and a wrong password produce the same 401 response, and
 * both pay for one bcrypt round, so the endpoint does not reveal which
 * accounts exist.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{SigninRequest, SigninResponse};
use crate::auth::password::PasswordHasher;
use crate::auth::sessions::TokenIssuer;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::shared::validation::ValidJson;

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid credentials")
}

/// Sign in handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store, hashing or signing failure
pub async fn signin(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    State(tokens): State<TokenIssuer>,
    ValidJson(request): ValidJson<SigninRequest>,
) -> Result<Json<SigninResponse>, ApiError> {
    tracing::info!("Signin request for: {}", request.email);

    let Some(user) = get_user_by_email(&pool, &request.email).await? else {
        tracing::warn!("Signin for unknown email: {}", request.email);
        hasher.verify_absent(&request.password).await?;
        return Err(invalid_credentials());
    };

    if !hasher.verify(&request.password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(invalid_credentials());
    }

    let token = tokens
        .issue(user.id)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    tracing::info!("User signed in successfully: {} ({})", user.id, user.email);

    Ok(Json(SigninResponse { token }))
}
