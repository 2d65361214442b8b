//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used consistently
//! across all backend modules. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx) - User/input issues
//!    - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//!    - [`Unauthorized`](AppError::Unauthorized) → 401 Unauthorized
//!    - [`NotFound`](AppError::NotFound) → 404 Not Found
//!    - [`Conflict`](AppError::Conflict) → 409 Conflict
//!
//! 2. **Server Errors** (5xx) - Internal/system issues
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! Every error renders as `{"error": <label>, "message": <message>}`. Server
//! errors never expose their detail to the client; it is only logged.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_symbol(symbol: &str) -> Result<String> {
//!     if symbol.trim().is_empty() {
//!         return Err(AppError::InvalidInput("Symbol cannot be empty".to_string()));
//!     }
//!     Ok(symbol.to_uppercase())
//! }
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::ErrorResponse;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input.
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing, invalid or expired credentials.
    ///
    /// **HTTP Status**: 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Requested resource not found.
    ///
    /// **HTTP Status**: 404 Not Found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness violation or a concurrent modification.
    ///
    /// **HTTP Status**: 409 Conflict
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (unexpected failures).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error label sent as the `error` field.
    pub fn label(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "ValidationError",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::NotFound(_) => "NotFound",
            AppError::Conflict(_) => "Conflict",
            AppError::Config(_) | AppError::Internal(_) => "InternalError",
        }
    }

    /// Get a user-friendly error message.
    ///
    /// For internal errors, returns a generic message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Config(_) | AppError::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Full error text stays in the server logs
        match status {
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                tracing::debug!("Client error: {}", self);
            }
            StatusCode::UNAUTHORIZED | StatusCode::CONFLICT => {
                tracing::warn!("Client error: {}", self);
            }
            _ => {
                tracing::error!("Server error: {}", self);
            }
        }

        let body = Json(ErrorResponse {
            error: self.label().to_string(),
            message: self.user_message(),
        });

        (status, body).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `sqlx::Error` to `AppError`.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Resource already exists".to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::InvalidInput("Referenced record does not exist".to_string())
            }
            sqlx::Error::Database(db_err) => {
                AppError::Internal(format!("Database error: {}", db_err.message()))
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert a rejected JSON body to a validation error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Config("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{err}");
        }
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = AppError::Internal("Database error: no such table: users".to_string());

        assert_eq!(err.label(), "InternalError");
        assert_eq!(err.user_message(), INTERNAL_MESSAGE);
    }

    #[test]
    fn test_client_message_passed_through() {
        let err = AppError::Conflict("User already exists".to_string());

        assert_eq!(err.label(), "Conflict");
        assert_eq!(err.user_message(), "User already exists");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = AppError::NotFound("Asset not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let parsed: ErrorResponse = serde_json::from_slice(&body).expect("Body is JSON");

        assert_eq!(
            parsed,
            ErrorResponse {
                error: "NotFound".to_string(),
                message: "Asset not found".to_string(),
            }
        );
    }
}
