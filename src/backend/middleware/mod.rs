//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - `x-auth-token` verification for private routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use devconnect::backend::middleware::auth_middleware;
//! use devconnect::backend::server::state::AppState;
//!
//! fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.layer(middleware::from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser, AUTH_HEADER};
