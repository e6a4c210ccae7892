//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, shared layers and fallback
//! - **`api_routes`** - `/api` endpoints grouped by resource
//!
//! # Example
//!
//! ```rust,no_run
//! use devconnect::backend::routes::create_router;
//! use devconnect::backend::server::state::AppState;
//!
//! # fn example(app_state: AppState) {
//! let router = create_router(app_state);
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
