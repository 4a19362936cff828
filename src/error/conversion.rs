/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, plus `From` conversions for the lower-level
 * errors handlers propagate with `?`.
 *
 * # Response Format
 *
 * ```json
 * { "message": "Error message" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::types::ApiError;
use crate::shared::validation::ValidationError;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ApiError::Internal { detail } = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let body = ErrorBody {
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::internal(format!("database error: {err}"))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}
