/**
 * Authentication Gate
 *
 * Protected handlers take an `AuthUser` argument. Axum resolves it from the
 * request parts before the body is read, so a request without a valid token
 * is rejected before any payload validation or store access.
 *
 * The `authorization` header carries the raw token, without a `Bearer`
 * scheme. A missing header is `401`; a header that does not verify is `403`.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
};
use chrono::Utc;

use crate::auth::sessions::TokenIssuer;
use crate::error::ApiError;

/// Identity resolved from a verified session token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Verify an `authorization` header value against the current time
pub fn authenticate(
    tokens: &TokenIssuer,
    header: Option<&HeaderValue>,
) -> Result<AuthUser, ApiError> {
    authenticate_at(tokens, header, Utc::now().timestamp())
}

/// Verify an `authorization` header value against `now` (Unix seconds)
pub fn authenticate_at(
    tokens: &TokenIssuer,
    header: Option<&HeaderValue>,
    now: i64,
) -> Result<AuthUser, ApiError> {
    let header = header.ok_or_else(|| {
        tracing::warn!("Missing authorization header");
        ApiError::unauthorized("Unauthorized: No token provided")
    })?;

    let token = header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        ApiError::forbidden("Unauthorized: Invalid token")
    })?;

    let claims = tokens.verify_at(token, now).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        ApiError::forbidden("Unauthorized: Invalid token")
    })?;

    Ok(AuthUser {
        user_id: claims.user_id,
    })
}

impl<S> FromRequestParts<S> for AuthUser
where
    TokenIssuer: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = TokenIssuer::from_ref(state);
        authenticate(&tokens, parts.headers.get(AUTHORIZATION))
    }
}
