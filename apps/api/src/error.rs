//! Error handling for the Discography API
//!
//! This module provides a unified error type shared by the repository,
//! service, and route layers, with HTTP status code mapping via Axum's
//! IntoResponse trait. Repositories hand back raw store failures as
//! [`ApiError::Database`]; only the route layer inspects them through
//! [`ApiError::map_store_error`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

/// Store failures the route layer knows how to translate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// A primary key or unique constraint rejected the write
    UniqueViolation,
    /// A foreign key constraint rejected the write or delete
    ForeignKeyViolation,
    /// Anything else
    Other,
}

/// Classify a driver error into a [`StoreErrorKind`].
///
/// This is the only place that knows how the store reports constraint
/// violations (PostgreSQL SQLSTATE 23505 and 23503, surfaced through
/// sqlx's `ErrorKind`).
pub fn classify_store_error(err: &sqlx::Error) -> StoreErrorKind {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreErrorKind::UniqueViolation
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            StoreErrorKind::ForeignKeyViolation
        }
        _ => StoreErrorKind::Other,
    }
}

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Resource Errors ==========
    /// Requested resource not found
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Resource already exists (duplicate id)
    #[error("{resource_type} already exists: {id}")]
    Conflict {
        resource_type: &'static str,
        id: String,
    },

    /// Write or delete rejected because of a reference between records
    #[error("{0}")]
    ReferenceConflict(String),

    // ========== Validation Errors ==========
    /// Entity validation failed
    #[error("invalid parameter: {0}")]
    ValidationError(String),

    /// Invalid request body format
    #[error("invalid body param: {0}")]
    InvalidBody(String),

    /// Invalid path parameter
    #[error("invalid path param: {0}")]
    InvalidPathParam(String),

    // ========== Database Errors ==========
    /// Database query failed
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Database connection pool exhausted
    #[error("database connection unavailable")]
    DatabaseUnavailable,

    // ========== Internal Errors ==========
    /// Internal server error (catch-all for unexpected errors)
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound { .. } => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::Conflict { .. } | Self::ReferenceConflict(_) => StatusCode::CONFLICT,

            // 400 Bad Request
            Self::ValidationError(_) | Self::InvalidBody(_) | Self::InvalidPathParam(_) => {
                StatusCode::BAD_REQUEST
            }

            // 503 Service Unavailable
            Self::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::ReferenceConflict(_) => "REFERENCE_CONFLICT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidPathParam(_) => "INVALID_PATH_PARAM",
            Self::Database(_) => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Create a conflict error for a specific resource
    pub fn conflict(resource_type: &'static str, id: impl ToString) -> Self {
        Self::Conflict {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Translate a raw store failure into a domain error.
    ///
    /// `translate` is called with the classified failure; returning `None`
    /// keeps the original error. Errors that did not come from the store are
    /// returned unchanged.
    pub fn map_store_error<F>(self, translate: F) -> Self
    where
        F: FnOnce(StoreErrorKind) -> Option<ApiError>,
    {
        let kind = match &self {
            Self::Database(err) => classify_store_error(err),
            _ => return self,
        };

        match translate(kind) {
            Some(translated) => {
                tracing::debug!(original = %self, kind = ?kind, "Translated store error");
                translated
            }
            None => self,
        }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let error_response = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// ========== Conversion Implementations ==========

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::DatabaseUnavailable,
            other => Self::Database(other),
        }
    }
}
