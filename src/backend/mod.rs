//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! the REST API for users, profiles and posts.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, store loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, token issuing and verification
//! - **`middleware`** - `x-auth-token` guard
//! - **`profile`** - Profile handlers and the GitHub proxy
//! - **`posts`** - Post, like and comment handlers
//! - **`store`** - Document persistence (memory or PostgreSQL)
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── profile/        - Profiles and GitHub proxy
//! ├── posts/          - Posts
//! ├── store/          - Document store
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Client → router → auth guard (private routes) → handler → store → JSON.
//! Handlers validate first, then load a document, mutate it and write it
//! back whole.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, BackendError>`; domain, token and store
//! errors convert with `?`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Document persistence
pub mod store;

/// Profile handlers
pub mod profile;

/// Post handlers
pub mod posts;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
pub use store::{DocumentStore, MemoryStore, PgStore, StoreError};
