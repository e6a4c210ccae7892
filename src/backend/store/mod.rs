//! Document Store
//!
//! Persistence for the three document kinds: users, profiles and posts.
//! Handlers never see a connection pool; they hold an
//! `Arc<dyn DocumentStore>` and work with whole documents.
//!
//! # Implementations
//!
//! - [`MemoryStore`] - `RwLock`-guarded maps, used in development and tests
//! - [`PgStore`] - PostgreSQL, one JSONB column per document
//!
//! # Consistency
//!
//! Every write replaces one whole document atomically. There are no
//! cross-document transactions and no optimistic concurrency checks:
//! two requests that read the same post, mutate it and write it back will
//! race, and the later write wins.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{Post, Profile, User};

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated (e.g. registered email)
    #[error("Duplicate {0}")]
    Duplicate(&'static str),

    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Whole-document access to users, profiles and posts
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new user
    ///
    /// # Errors
    ///
    /// `StoreError::Duplicate("email")` if the email is already registered.
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Returns whether a user was removed
    async fn delete_user(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn find_profile_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError>;

    /// All profiles, oldest first
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError>;

    /// Insert or replace the profile owned by `profile.user`
    async fn save_profile(&self, profile: &Profile) -> Result<(), StoreError>;

    /// Returns whether a profile was removed
    async fn delete_profile_by_user(&self, user: Uuid) -> Result<bool, StoreError>;

    /// Insert or replace a post by id
    async fn save_post(&self, post: &Post) -> Result<(), StoreError>;

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// All posts, newest first
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Returns whether a post was removed
    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError>;
}
