//! PostgreSQL document store
//!
//! Each document is stored whole in a `doc JSONB` column. The columns next
//! to it (`email`, `user_id`, `created_at`) exist only for uniqueness and
//! ordering; they are written from the document on every save.
//!
//! Schema lives in `migrations/` and is applied by
//! `backend::server::config::load_store` at startup.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{DocumentStore, StoreError};
use crate::shared::{Post, Profile, User};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_unique(err: sqlx::Error, what: &'static str) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Duplicate(what),
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, doc, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(Json(user))
        .bind(user.date)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique(e, "email"))?;

        Ok(())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let doc = sqlx::query_scalar::<_, Json<User>>("SELECT doc FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc.map(|Json(user)| user))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let doc = sqlx::query_scalar::<_, Json<User>>("SELECT doc FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc.map(|Json(user)| user))
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_profile_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError> {
        let doc =
            sqlx::query_scalar::<_, Json<Profile>>("SELECT doc FROM profiles WHERE user_id = $1")
                .bind(user)
                .fetch_optional(&self.pool)
                .await?;
        Ok(doc.map(|Json(profile)| profile))
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let docs = sqlx::query_scalar::<_, Json<Profile>>(
            "SELECT doc FROM profiles ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(docs.into_iter().map(|Json(profile)| profile).collect())
    }

    async fn save_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, user_id, doc, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET doc = EXCLUDED.doc
            "#,
        )
        .bind(profile.id)
        .bind(profile.user)
        .bind(Json(profile))
        .bind(profile.date)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique(e, "profile"))?;

        Ok(())
    }

    async fn delete_profile_by_user(&self, user: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn save_post(&self, post: &Post) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, user_id, doc, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc
            "#,
        )
        .bind(post.id)
        .bind(post.user)
        .bind(Json(post))
        .bind(post.date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let doc = sqlx::query_scalar::<_, Json<Post>>("SELECT doc FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc.map(|Json(post)| post))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let docs =
            sqlx::query_scalar::<_, Json<Post>>("SELECT doc FROM posts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(docs.into_iter().map(|Json(post)| post).collect())
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
