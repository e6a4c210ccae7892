//! Authentication Module
//!
//! This module handles registration, login and token management.
//!
//! # Architecture
//!
//! - **`users`** - Password hashing, registration and credential checks
//! - **`sessions`** - Token issuing and verification
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs; there is no server-side session
//! - Tokens are not revoked early: a deleted user's token stays valid until
//!   it expires
//! - Bad credentials return one generic message (no user enumeration)

/// Password hashing and account operations
pub mod users;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest, TokenResponse};
pub use handlers::{get_me, login, register};
pub use sessions::{TokenError, TokenService};
