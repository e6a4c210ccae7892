//! DevConnect - Main Library
//!
//! DevConnect is the REST backend of a developer social network. Users
//! register and log in with JWT bearer tokens, maintain a professional
//! profile with experience and education history, and write posts that
//! other users can like and comment on.
//!
//! # Module Structure
//!
//! The library is organized into two modules:
//!
//! - **`shared`** - Domain types and rules
//!   - User, profile and post documents
//!   - Request validation
//!   - Error types and configuration
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and handlers
//!   - Token issuing and the `x-auth-token` middleware
//!   - Document store (in-memory or PostgreSQL)
//!   - GitHub repository proxy
//!
//! # Usage
//!
//! ```rust,no_run
//! use devconnect::backend::server::init::create_app;
//! use devconnect::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error` holds domain errors with no HTTP knowledge
//! - `backend::error::BackendError` maps every failure onto a status code
//!   and a JSON body

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
