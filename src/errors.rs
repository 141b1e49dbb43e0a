//! Centralized error handling.
//!
//! One error type for the whole application, with a canonical mapping to
//! HTTP responses. Database and internal error details are logged, never
//! sent to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Token is missing")]
    TokenMissing,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    // Resource errors
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    // Validation
    #[error("Validation failed")]
    Validation(Vec<String>),

    // Backend failures
    #[error("Database error")]
    Database(sea_orm::DbErr),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body, matching the API contract:
/// `{"error": "...", "details": [...]}` (details only on validation errors).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
}

impl AppError {
    /// HTTP status for this error
    fn status(&self) -> StatusCode {
        match self {
            AppError::TokenMissing | AppError::TokenInvalid | AppError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message. Backend failures are logged and replaced with a
    /// generic message.
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = match &self {
            AppError::Validation(details) => Some(details.clone()),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.user_message(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        // A unique index is the second line of defense behind the service
        // level pre-checks; report a violation as a duplicate, not a 500.
        if let Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return AppError::Conflict("Duplicate value for a unique field.".to_string());
        }
        AppError::Database(err)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::debug!("Token verification failed: {:?}", err);
        AppError::TokenInvalid
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: &'static str) -> Self {
        AppError::NotFound(entity)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(details: Vec<String>) -> Self {
        AppError::Validation(details)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_and_validation_map_to_400() {
        assert_eq!(
            AppError::conflict("Client with this CNPJ already exists.").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::validation(vec!["cnpj is invalid".into()]).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_carries_entity_name() {
        let err = AppError::not_found("Client");
        assert_eq!(err.to_string(), "Client not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn auth_errors_map_to_401() {
        assert_eq!(AppError::TokenMissing.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::TokenInvalid.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
