//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported language id: {0}")]
    InvalidLanguage(i32),

    // Grading precondition errors
    #[error("Exercise has no test cases")]
    NoTestCases,

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("Execution sandbox unavailable: {0}")]
    ExecutionUnavailable(String),

    #[error("Content API error: {0}")]
    ContentApi(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidLanguage(_) => "INVALID_LANGUAGE",
            Self::NoTestCases => "NO_TEST_CASES",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ExecutionUnavailable(_) => "EXECUTION_UNAVAILABLE",
            Self::ContentApi(_) => "CONTENT_API_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidLanguage(_) => StatusCode::BAD_REQUEST,
            Self::NoTestCases => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ExecutionUnavailable(_) | Self::ContentApi(_) => StatusCode::BAD_GATEWAY,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "A storage error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

// Implement From for common error types
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NoTestCases.error_code(), "NO_TEST_CASES");
        assert_eq!(AppError::InvalidLanguage(999).error_code(), "INVALID_LANGUAGE");
        assert_eq!(
            AppError::ExecutionUnavailable("timeout".into()).error_code(),
            "EXECUTION_UNAVAILABLE"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NoTestCases.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(AppError::InvalidLanguage(1).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::ExecutionUnavailable("down".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
