//! Posts Module
//!
//! Posts with likes and comments. Every route here requires a token.
//!
//! # Routes
//!
//! - `POST /api/posts`, `GET /api/posts`
//! - `GET /api/posts/{id}`, `DELETE /api/posts/{id}`
//! - `PUT /api/posts/like/{id}`, `PUT /api/posts/unlike/{id}`
//! - `POST /api/posts/comment/{id}`, `DELETE /api/posts/comment/{id}/{comment_id}`

/// Post HTTP handlers
pub mod handlers;

pub use handlers::{
    add_comment, create_post, delete_comment, delete_post, get_post, like_post, list_posts,
    unlike_post,
};
