//! Post Data Structures
//!
//! Posts carry a denormalized author snapshot (name and avatar at the time of
//! writing), an ordered list of likes and an ordered list of comments. Both
//! lists are newest-first.
//!
//! # Invariants
//!
//! - A user appears at most once in `likes`
//! - Unliking removes the entry owned by that user, wherever it sits
//! - Comments are removed by their own id, never by position

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{PostError, SharedError};
use crate::shared::user::User;
use crate::shared::validation::Validator;

/// One user's like on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Like {
    pub id: Uuid,
    pub user: Uuid,
}

/// A comment, with the commenter's name and avatar captured at write time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

/// Post document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: Uuid,
    /// Author
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Post {
    /// New post by `author` with empty likes and comments
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn is_liked_by(&self, user: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user)
    }

    /// Prepend a like from `user`
    ///
    /// # Errors
    ///
    /// `PostError::AlreadyLiked` if `user` already likes the post; the list is
    /// left unchanged.
    pub fn like(&mut self, user: Uuid) -> Result<(), PostError> {
        if self.is_liked_by(user) {
            return Err(PostError::AlreadyLiked);
        }
        self.likes.insert(
            0,
            Like {
                id: Uuid::new_v4(),
                user,
            },
        );
        Ok(())
    }

    /// Remove the like owned by `user`
    ///
    /// # Errors
    ///
    /// `PostError::NotLiked` if `user` has no like on the post.
    pub fn unlike(&mut self, user: Uuid) -> Result<(), PostError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user == user)
            .ok_or(PostError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    /// Prepend a comment written by `author`
    pub fn add_comment(&mut self, author: &User, text: String) -> &Comment {
        self.comments.insert(
            0,
            Comment {
                id: Uuid::new_v4(),
                user: author.id,
                text,
                name: author.name.clone(),
                avatar: author.avatar.clone(),
                date: Utc::now(),
            },
        );
        &self.comments[0]
    }

    /// Remove comment `comment_id` on behalf of `user`
    ///
    /// # Errors
    ///
    /// - `PostError::CommentNotFound` if no comment has that id
    /// - `PostError::NotCommentOwner` if the comment belongs to someone else
    pub fn remove_comment(&mut self, comment_id: Uuid, user: Uuid) -> Result<Comment, PostError> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(PostError::CommentNotFound)?;

        if self.comments[index].user != user {
            return Err(PostError::NotCommentOwner);
        }

        Ok(self.comments.remove(index))
    }
}

/// Body of `POST /api/posts` and `POST /api/posts/comment/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRequest {
    pub text: String,
}

impl TextRequest {
    pub fn into_text(self) -> Result<String, SharedError> {
        Validator::new()
            .required("text", &self.text, "Text is required")
            .finish()?;
        Ok(self.text)
    }
}
