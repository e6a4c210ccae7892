//! Profile Module
//!
//! One profile document per user, with embedded experience and education
//! lists, plus a read-only proxy to the owner's GitHub repositories.
//!
//! # Routes
//!
//! - `GET /api/profile/me` - Caller's profile (private)
//! - `GET /api/profile` - All profiles
//! - `POST /api/profile` - Create or update the caller's profile (private)
//! - `DELETE /api/profile` - Delete profile and user (private)
//! - `GET /api/profile/user/{user_id}` - Profile by owner
//! - `PUT /api/profile/experience`, `DELETE /api/profile/experience/{exp_id}`
//! - `PUT /api/profile/education`, `DELETE /api/profile/education/{edu_id}`
//! - `GET /api/profile/github/{username}` - Repository listing

/// Profile HTTP handlers
pub mod handlers;

/// GitHub repository proxy
pub mod github;

pub use github::github_repos;
pub use handlers::{
    add_education, add_experience, delete_education, delete_experience, delete_profile,
    get_my_profile, get_profile_by_user, list_profiles, upsert_profile, MessageResponse,
};
