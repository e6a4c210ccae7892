//! User Data Structures
//!
//! The stored user record and the views of it that are safe to send to
//! clients. The password hash lives only on [`User`] and never leaves the
//! server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// User document as persisted in the credential store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique email address
    pub email: String,
    /// bcrypt hash of the password
    pub password: String,
    /// Gravatar URI derived from the email at registration
    pub avatar: String,
    /// Registration time
    pub date: DateTime<Utc>,
}

impl User {
    /// Create a user from an already-hashed password
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let avatar = gravatar_url(&email);
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password: password_hash,
            avatar,
            date: Utc::now(),
        }
    }

    /// Author snapshot used by posts and comments
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: Some(self.name.clone()),
            avatar: Some(self.avatar.clone()),
        }
    }
}

/// User record without the password hash
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            date: user.date,
        }
    }
}

/// Name and avatar of a user, joined into profile responses
///
/// `name` and `avatar` are `None` when the referenced user no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl UserSummary {
    /// Summary for a user id that could not be resolved
    pub fn missing(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            avatar: None,
        }
    }
}

/// Lowercased, trimmed email used as the lookup key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Gravatar image URL for an email (200px, PG rating, mystery-man fallback)
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(normalize_email(email).as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm",
        hex::encode(digest)
    )
}
