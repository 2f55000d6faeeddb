//! Unified error types for the Skin Museum API
//!
//! This module defines error types for each layer:
//! - `ValidationError`: Caller supplied invalid parameters (never retried)
//! - `DomainError`: Core catalog errors (validation, absence, consistency, store)
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Invalid request parameters, detected before any store access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Maximum page size is {max}, requested {requested}")]
    LimitExceeded { requested: u64, max: u64 },

    #[error("Sorting and filtering cannot be combined")]
    UnsupportedCombination,

    #[error("Invalid skin hash: {0}")]
    InvalidHash(String),

    #[error("Unknown sort mode: {0}")]
    UnknownSortMode(String),

    #[error("Unknown filter mode: {0}")]
    UnknownFilterMode(String),
}

/// Domain layer errors - catalog lookups and query resolution
#[derive(Debug, Error)]
pub enum DomainError {
    /// Strict lookup found no skin with this hash
    #[error("Skin not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The curatorial order referenced a skin the store could not hydrate
    #[error("Consistency fault: {0}")]
    Consistency(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(e))
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(hash)) => (
                StatusCode::NOT_FOUND,
                "Not found",
                Some(format!("No skin with hash {}", hash)),
            ),
            AppError::Domain(DomainError::Validation(e)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(e.to_string()),
            ),
            AppError::Domain(DomainError::Consistency(msg)) => {
                tracing::error!("Consistency fault: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err: AppError = ValidationError::UnsupportedCombination.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err: AppError = ValidationError::LimitExceeded {
            requested: 1001,
            max: 1000,
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::Domain(DomainError::NotFound("abc".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = AppError::NotFound("No skin with hash abc".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_hash_maps_to_bad_request() {
        let err: AppError = ValidationError::InvalidHash("xyz".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_faults_map_to_500() {
        let err = AppError::Domain(DomainError::Consistency("dangling".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::Domain(DomainError::Database("timeout".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn limit_exceeded_message_names_both_values() {
        let err = ValidationError::LimitExceeded {
            requested: 5000,
            max: 1000,
        };
        assert_eq!(err.to_string(), "Maximum page size is 1000, requested 5000");
    }
}
