//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and
//! its conversion into an HTTP response.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` definition and constructors
//! - **`conversion`** - `IntoResponse` and `From` impls for domain errors
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::Json;
//! use devconnect::backend::error::BackendError;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::not_found("Profile not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
