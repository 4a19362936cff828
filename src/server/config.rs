/**
 * Server Configuration
 *
 * Configuration is read from environment variables (after `.env` is loaded
 * by the binary). The token secret is mandatory; everything else has a
 * default.
 *
 * | Variable       | Default                         |
 * |----------------|---------------------------------|
 * | `JWT_SECRET`   | required                        |
 * | `DATABASE_URL` | `sqlite://chatroom.db?mode=rwc` |
 * | `SERVER_PORT`  | `3001`                          |
 * | `BCRYPT_COST`  | `10`                            |
 */

use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;

use crate::auth::password::PasswordHasher;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://chatroom.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Validated server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Symmetric secret used to sign and verify session tokens
    pub jwt_secret: String,
    pub database_url: String,
    pub port: u16,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match get("SERVER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "SERVER_PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(raw) => {
                let cost = raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                    name: "BCRYPT_COST",
                    reason: e.to_string(),
                })?;
                if !(PasswordHasher::MIN_COST..=PasswordHasher::MAX_COST).contains(&cost) {
                    return Err(ConfigError::Invalid {
                        name: "BCRYPT_COST",
                        reason: format!(
                            "must be between {} and {}",
                            PasswordHasher::MIN_COST,
                            PasswordHasher::MAX_COST
                        ),
                    });
                }
                cost
            }
            None => PasswordHasher::DEFAULT_COST,
        };

        Ok(Self {
            jwt_secret,
            database_url,
            port,
            bcrypt_cost,
        })
    }

    /// Address to listen on: all interfaces, configured port
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
