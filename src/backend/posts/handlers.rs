/**
 * Post Handlers
 *
 * All post routes are private; the router wraps them in `auth_middleware`
 * and handlers read the caller through `AuthUser`.
 *
 * # Responses
 *
 * - Create and get return the post
 * - Like and unlike return the post's like list
 * - Comment and delete-comment return the post's comment list
 * - Delete returns `{ "msg": "Post Removed" }`
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::profile::handlers::{parse_id, MessageResponse};
use crate::backend::server::state::{AppState, Store};
use crate::shared::post::TextRequest;
use crate::shared::{Comment, Like, Post};

pub const NO_POST_MSG: &str = "No Post found";
pub const NOT_AUTHORIZED_MSG: &str = "User not authorized";

async fn load_post(store: &Store, raw_id: &str) -> Result<Post, BackendError> {
    let id = parse_id(raw_id, NO_POST_MSG)?;
    store.find_post(id).await?.ok_or_else(|| {
        tracing::warn!("Post not found: {}", id);
        BackendError::not_found(NO_POST_MSG)
    })
}

/// POST /api/posts
///
/// # Errors
///
/// * `400 Bad Request` - Empty text
/// * `404 Not Found` - The caller's user record no longer exists
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Post>, BackendError> {
    let Json(request) = body?;
    let text = request.into_text()?;

    let author = state
        .store
        .find_user(auth.id())
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    let post = Post::new(&author, text);
    state.store.save_post(&post).await?;

    tracing::info!("Post {} created by {}", post.id, author.id);
    Ok(Json(post))
}

/// GET /api/posts
pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Post>>, BackendError> {
    Ok(Json(state.store.list_posts().await?))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    Ok(Json(load_post(&state.store, &id).await?))
}

/// DELETE /api/posts/{id}
///
/// # Errors
///
/// * `404 Not Found` - No such post (checked before ownership)
/// * `401 Unauthorized` - Caller is not the author
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let post = load_post(&state.store, &id).await?;

    if post.user != auth.id() {
        tracing::warn!("User {} tried to delete post {} of {}", auth.id(), post.id, post.user);
        return Err(BackendError::unauthorized(NOT_AUTHORIZED_MSG));
    }

    state.store.delete_post(post.id).await?;
    tracing::info!("Post {} removed", post.id);
    Ok(Json(MessageResponse { msg: "Post Removed" }))
}

/// PUT /api/posts/like/{id}
///
/// # Errors
///
/// * `400 Bad Request` - `Post already liked`
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    let mut post = load_post(&state.store, &id).await?;
    post.like(auth.id())?;
    state.store.save_post(&post).await?;
    Ok(Json(post.likes))
}

/// PUT /api/posts/unlike/{id}
///
/// # Errors
///
/// * `400 Bad Request` - `Post has not yet been liked`
pub async fn unlike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    let mut post = load_post(&state.store, &id).await?;
    post.unlike(auth.id())?;
    state.store.save_post(&post).await?;
    Ok(Json(post.likes))
}

/// POST /api/posts/comment/{id}
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let Json(request) = body?;
    let text = request.into_text()?;

    let author = state
        .store
        .find_user(auth.id())
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    let mut post = load_post(&state.store, &id).await?;
    post.add_comment(&author, text);
    state.store.save_post(&post).await?;

    Ok(Json(post.comments))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
///
/// # Errors
///
/// * `404 Not Found` - `Comment does not exist`
/// * `401 Unauthorized` - Caller did not write the comment
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let mut post = load_post(&state.store, &id).await?;
    let comment_id: Uuid = parse_id(&comment_id, "Comment does not exist")?;

    post.remove_comment(comment_id, auth.id())?;
    state.store.save_post(&post).await?;

    Ok(Json(post.comments))
}
