/**
 * API Error Types
 *
 * The single error type returned by every handler. Each variant maps to one
 * HTTP status code (see `status_code`) and a client-safe message.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Which uniqueness constraint a `Conflict` came from
///
/// The two resources are reported with different status codes: a taken
/// email is `409 Conflict`, a taken room slug is `400 Bad Request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResource {
    /// `users.email`
    UserEmail,
    /// `rooms.slug`
    RoomSlug,
}

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload or path parameter failed validation
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable error message
        message: String,
    },

    /// A uniqueness constraint was violated
    #[error("Conflict: {message}")]
    Conflict {
        /// The constraint that was hit
        resource: ConflictResource,
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials, missing token, or an identity the store doesn't know
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// A token was presented but could not be verified
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected failure inside the server
    ///
    /// `detail` is logged when the response is built and is never returned
    /// to the client.
    #[error("Internal error: {detail}")]
    Internal {
        /// Diagnostic detail for the logs
        detail: String,
    },
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn conflict(resource: ConflictResource, message: impl Into<String>) -> Self {
        Self::Conflict {
            resource,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { resource, .. } => match resource {
                ConflictResource::UserEmail => StatusCode::CONFLICT,
                ConflictResource::RoomSlug => StatusCode::BAD_REQUEST,
            },
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to show to clients
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput { message }
            | Self::Conflict { message, .. }
            | Self::Unauthorized { message }
            | Self::Forbidden { message } => message.clone(),
            Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}
