/**
 * Backend Error Types
 *
 * This module defines the single error type returned by every HTTP handler.
 * Each variant corresponds to one row of the API's error contract.
 *
 * # Error Categories
 *
 * | Variant           | Status | Body                   |
 * |-------------------|--------|------------------------|
 * | `Validation`      | 400    | `{errors: [...]}`      |
 * | `BadRequest`      | 400    | `{msg}`                |
 * | `Unauthenticated` | 401    | `{msg}`                |
 * | `Unauthorized`    | 401    | `{msg}`                |
 * | `NotFound`        | 404    | `{msg}`                |
 * | `Conflict`        | 400    | `{errors: [{msg}]}`    |
 * | `Internal`        | 500    | `Server Error` (text)  |
 *
 * Domain errors from `shared`, the token service and the store convert into
 * these variants in `conversion.rs`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::error::FieldError;

/// Backend error returned by handlers
///
/// # Usage
///
/// ```rust
/// use devconnect::backend::error::BackendError;
///
/// let err = BackendError::not_found("No Post found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// One or more request fields failed validation
    #[error("Validation failed: {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Request conflicts with the document's current state (like rules)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing, invalid or expired token
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Authenticated caller does not own the resource
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Post, profile, comment or sub-entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate registration
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected store, signing or upstream failure
    ///
    /// The message is logged, never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create a bad-request error rendered as `{msg}`
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create an unauthenticated error
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    /// Create an ownership error
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error
    ///
    /// # Arguments
    ///
    /// * `msg` - Diagnostic message for the server log
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `BadRequest`, `Conflict` - 400 Bad Request
    /// - `Unauthenticated`, `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) | Self::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated(_) | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
