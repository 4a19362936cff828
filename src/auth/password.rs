/**
 * Password Hashing
 *
 * bcrypt is deliberately slow, so both hashing and verification run on
 * Tokio's blocking pool instead of the async workers.
 */

use thiserror::Error;

use crate::error::ApiError;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::internal(err.to_string())
    }
}

/// Salted one-way password hashing with a fixed bcrypt cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Cost used when `BCRYPT_COST` is not configured
    pub const DEFAULT_COST: u32 = 10;

    /// Lowest cost bcrypt accepts
    pub const MIN_COST: u32 = 4;

    /// Highest cost bcrypt accepts
    pub const MAX_COST: u32 = 31;

    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh random salt
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    /// Check a password against a stored hash in constant time
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(valid)
    }

    /// Spend the same bcrypt work as `verify` when there is no stored hash
    ///
    /// Always `false`. Signin calls this for unknown emails so they take as
    /// long to reject as a wrong password.
    pub async fn verify_absent(&self, password: &str) -> Result<bool, PasswordError> {
        self.hash(password).await?;
        Ok(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COST)
    }
}
