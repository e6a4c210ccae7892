//! Shared Error Types
//!
//! This module defines the error types raised by the domain layer: request
//! validation and the sub-list mutations on profiles and posts. They carry no
//! HTTP knowledge; the backend maps them onto status codes.
//!
//! # Error Categories
//!
//! - `SharedError` - Validation failures
//! - `PostError` - Like/comment rule violations on a post
//! - `ProfileError` - Missing experience/education entries
//!
//! # Usage
//!
//! ```rust
//! use devconnect::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "Text is required");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure
///
/// Serialized as `{ "msg": ..., "param": ..., "location": "body" }`, the
/// shape clients already render in their alert banners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Human-readable error message
    pub msg: String,
    /// Name of the offending request field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Where the field was read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FieldError {
    /// Error attached to a body field
    pub fn field(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
            location: Some("body".to_string()),
        }
    }

    /// Error not tied to any particular field (e.g. bad credentials)
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
            location: None,
        }
    }
}

/// Validation errors raised before any document is touched
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// One or more request fields failed validation
    #[error("Validation failed: {}", join_messages(.errors))]
    ValidationError {
        /// Every failed check, in field order
        errors: Vec<FieldError>,
    },
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.msg.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SharedError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            errors: vec![FieldError::field(field, message)],
        }
    }

    /// Create a validation error from collected field errors
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self::ValidationError { errors }
    }
}

/// Rule violations when editing a post's likes or comments
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotLiked,

    #[error("Comment does not exist")]
    CommentNotFound,

    #[error("User not authorized")]
    NotCommentOwner,
}

/// Rule violations when editing a profile's sub-lists
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Education not found")]
    EducationNotFound,
}
