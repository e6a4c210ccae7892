//! Shared Module
//!
//! This module contains the domain types of the application: users, profiles
//! and posts, the request bodies that create them and the rules that mutate
//! their embedded lists. Nothing here knows about HTTP or storage.
//!
//! # Overview
//!
//! Handlers in `backend` deserialize request bodies into the `*Request`
//! types, validate them into domain values, load a document, apply one of
//! the mutation methods below and write the document back.

/// Shared error types
pub mod error;

/// Chain-style request validation
pub mod validation;

/// User records and author summaries
pub mod user;

/// Profiles with experience and education sub-lists
pub mod profile;

/// Posts with likes and comments
pub mod post;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{FieldError, PostError, ProfileError, SharedError};
pub use post::{Comment, Like, Post};
pub use profile::{Education, Experience, Profile, ProfileView};
pub use user::{PublicUser, User, UserSummary};
