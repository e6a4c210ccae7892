/**
 * Error Conversion
 *
 * This module turns backend errors into HTTP responses and lifts the domain
 * errors of the other layers into `BackendError`, so handlers can use `?`
 * throughout.
 *
 * # Response Format
 *
 * Validation errors and a duplicate registration:
 * ```json
 * { "errors": [ { "msg": "Text is required", "param": "text", "location": "body" } ] }
 * ```
 *
 * Like rules, authentication, ownership and not-found errors:
 * ```json
 * { "msg": "No Post found" }
 * ```
 *
 * Internal errors are a plain-text `Server Error` body; the cause is logged.
 */

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::sessions::TokenError;
use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;
use crate::shared::error::{FieldError, PostError, ProfileError, SharedError};

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// # Example
    ///
    /// ```rust
    /// use axum::response::IntoResponse;
    /// use devconnect::backend::error::BackendError;
    ///
    /// let response = BackendError::not_found("No Post found").into_response();
    /// assert_eq!(response.status().as_u16(), 404);
    /// ```
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::Validation(errors) => {
                (status, Json(serde_json::json!({ "errors": errors }))).into_response()
            }
            Self::Conflict(msg) => (
                status,
                Json(serde_json::json!({ "errors": [FieldError::message(msg)] })),
            )
                .into_response(),
            Self::BadRequest(msg)
            | Self::Unauthenticated(msg)
            | Self::Unauthorized(msg)
            | Self::NotFound(msg) => {
                (status, Json(serde_json::json!({ "msg": msg }))).into_response()
            }
            Self::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    "Server Error",
                )
                    .into_response()
            }
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { errors } => BackendError::Validation(errors),
        }
    }
}

impl From<PostError> for BackendError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::AlreadyLiked | PostError::NotLiked => BackendError::bad_request(err.to_string()),
            PostError::CommentNotFound => BackendError::NotFound(err.to_string()),
            PostError::NotCommentOwner => BackendError::Unauthorized(err.to_string()),
        }
    }
}

impl From<ProfileError> for BackendError {
    fn from(err: ProfileError) -> Self {
        BackendError::NotFound(err.to_string())
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(detail) => BackendError::Internal(detail),
            _ => BackendError::Unauthenticated("Token is not valid".to_string()),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate("email") => BackendError::Conflict("User already exists".to_string()),
            other => BackendError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::Validation(vec![FieldError::message(rejection.body_text())])
    }
}
