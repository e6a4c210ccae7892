//! Server Module
//!
//! This module initializes and configures the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Document store selection and database migrations
//! - **`init`** - App creation and graceful serving
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env()` in the binary
//! 2. **Store**: PostgreSQL when `DATABASE_URL` is set, memory otherwise
//! 3. **State**: token service and HTTP client built from the config
//! 4. **Router**: routes, auth layer, tracing and CORS
//!
//! # Example
//!
//! ```rust,no_run
//! use devconnect::backend::server::{create_app, serve};
//! use devconnect::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let port = config.server_port;
//! serve(create_app(config).await?, port).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Store loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{build_app, create_app, serve};
pub use state::AppState;
