//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - POST /api/users
//! ├── login.rs    - POST /api/auth
//! └── me.rs       - GET /api/auth
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user created → token returned
//! 2. **Login**: email and password → credentials checked → token returned
//! 3. **Get Me**: `x-auth-token` → token verified → user record returned

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{LoginRequest, RegisterRequest, TokenResponse};

pub use login::login;
pub use me::get_me;
pub use register::register;
