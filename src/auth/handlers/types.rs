/**
 * Authentication Handler Types
 *
 * Request and response bodies for signup and signin, with their validation
 * rules.
 */

use serde::{Deserialize, Serialize};

use crate::shared::validation::{
    validate_email, validate_name, validate_password, validate_present, Validate,
    ValidationError,
};

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// Email address, unique across users
    pub email: String,
    /// Plain password (hashed before storage, never logged)
    pub password: String,
    /// Display name, stored as the user's name
    pub username: String,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_email("email", &self.email)?;
        validate_password("password", &self.password)?;
        validate_name("username", &self.username)
    }
}

/// Sign in request
///
/// Only presence is checked; anything else is judged against the stored
/// account and fails as `Invalid credentials`.
#[derive(Deserialize, Serialize, Debug)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

impl Validate for SigninRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_present("email", &self.email)?;
        validate_present("password", &self.password)
    }
}

/// Returned by signup with `201 Created`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Returned by signin
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SigninResponse {
    /// Session token, valid for 7 days
    pub token: String,
}
