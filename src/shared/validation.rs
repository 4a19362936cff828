/**
 * Request Validation
 *
 * Request types implement `Validate`; handlers receive them through
 * `ValidJson<T>`, which rejects malformed JSON and failed validation with the
 * same `InvalidInput` error.
 */

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::ApiError;

/// Longest email accepted
pub const MAX_EMAIL_LEN: usize = 254;

/// bcrypt ignores input past 72 bytes, so longer passwords are refused
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Longest username or room name, in characters
pub const MAX_NAME_CHARS: usize = 64;

/// A single field that failed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Shape checks for a deserialized request
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Check an email address
///
/// Requires exactly one `@` with a non-empty local part and domain, and no
/// whitespace anywhere.
pub fn validate_email(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if value.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::new(
            field,
            format!("must be at most {MAX_EMAIL_LEN} characters"),
        ));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::new(field, "must not contain whitespace"));
    }

    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError::new(field, "must be a valid email address")),
    }
}

/// Check a password
pub fn validate_password(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if value.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new(
            field,
            format!("must be at most {MAX_PASSWORD_BYTES} bytes"),
        ));
    }
    Ok(())
}

/// Check that a credential field was supplied
///
/// Signin only needs this: a stored account can never match a value that
/// fails the signup rules, so those requests fall through to `401`.
pub fn validate_present(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

/// Check a display name or slug: non-blank and at most `MAX_NAME_CHARS`
pub fn validate_name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if value.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::new(
            field,
            format!("must be at most {MAX_NAME_CHARS} characters"),
        ));
    }
    Ok(())
}

/// JSON body extractor that also runs `Validate`
///
/// Any decoding failure (wrong content type, malformed JSON, missing or
/// mistyped fields) and any validation failure become
/// `ApiError::InvalidInput`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                ApiError::invalid_input("Incorrect inputs")
            })?;

        value.validate().map_err(|e| {
            tracing::warn!("Validation failed: {}", e);
            ApiError::from(e)
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("email", "a@x.com").is_ok());
        assert!(validate_email("email", "first.last+tag@sub.example.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "plain", "@x.com", "a@", "a@b@c", "a b@x.com", "a@x .com"] {
            let err = validate_email("email", email).unwrap_err();
            assert_eq!(err.field, "email", "email {email:?} should be rejected");
        }
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@x.com", "a".repeat(MAX_EMAIL_LEN));
        assert!(validate_email("email", &email).is_err());
    }

    #[test]
    fn test_password_bounds() {
        assert!(validate_password("password", "p1").is_ok());
        assert!(validate_password("password", "").is_err());
        assert!(validate_password("password", &"x".repeat(MAX_PASSWORD_BYTES)).is_ok());
        assert!(validate_password("password", &"x".repeat(MAX_PASSWORD_BYTES + 1)).is_err());
    }

    #[test]
    fn test_present() {
        assert!(validate_present("email", "notanemail").is_ok());
        assert!(validate_present("password", &"p".repeat(MAX_PASSWORD_BYTES + 1)).is_ok());
        assert_eq!(validate_present("password", "").unwrap_err().field, "password");
    }

    #[test]
    fn test_name_rules() {
        assert!(validate_name("name", "general").is_ok());
        assert!(validate_name("name", "A").is_ok());
        assert!(validate_name("name", "   ").is_err());
        assert!(validate_name("name", &"é".repeat(MAX_NAME_CHARS)).is_ok());
        assert!(validate_name("name", &"é".repeat(MAX_NAME_CHARS + 1)).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new("username", "must not be empty");
        assert_eq!(err.to_string(), "Invalid username: must not be empty");
    }
}
