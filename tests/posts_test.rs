//! Integration tests for posts, likes and comments

mod common;

use axum::http::StatusCode;
use common::assertions::{assert_msg, error_messages};
use common::*;
use devconnect::backend::DocumentStore;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

fn post_path(prefix: &str, post: &Value) -> String {
    format!("{}/{}", prefix, post["id"].as_str().unwrap())
}

async fn like(app: &TestApp, user: &TestUser, post: &Value) -> axum_test::TestResponse {
    let (name, value) = user.header();
    app.server
        .put(&post_path("/api/posts/like", post))
        .add_header(name, value)
        .await
}

#[tokio::test]
async fn test_posts_require_token() {
    let app = spawn_app();

    let response = app.server.get("/api/posts").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_msg(&response, "Authorization Failed, No token found");
}

#[tokio::test]
async fn test_create_post_copies_author() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;

    let post = create_post(&app.server, &jane, "First post").await;

    assert_eq!(post["text"], "First post");
    assert_eq!(post["user"], jane.id.to_string());
    assert_eq!(post["name"], "Jane");
    assert!(post["avatar"].as_str().unwrap().contains("gravatar.com"));
    assert_eq!(post["likes"], json!([]));
    assert_eq!(post["comments"], json!([]));
}

#[tokio::test]
async fn test_create_post_requires_text() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;
    let (name, value) = jane.header();

    let response = app
        .server
        .post("/api/posts")
        .add_header(name, value)
        .json(&json!({ "text": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_messages(&response), vec!["Text is required"]);
}

#[tokio::test]
async fn test_list_posts_newest_first() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;
    create_post(&app.server, &jane, "one").await;
    create_post(&app.server, &jane, "two").await;
    create_post(&app.server, &jane, "three").await;
    let (name, value) = jane.header();

    let posts: Vec<Value> = app.server.get("/api/posts").add_header(name, value).await.json();

    let texts: Vec<&str> = posts.iter().map(|p| p["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["three", "two", "one"]);
}

#[tokio::test]
async fn test_get_post_not_found() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;

    let (name, value) = jane.header();
    let unknown = app
        .server
        .get(&format!("/api/posts/{}", Uuid::new_v4()))
        .add_header(name, value)
        .await;
    let (name, value) = jane.header();
    let malformed = app.server.get("/api/posts/abc").add_header(name, value).await;

    assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);
    assert_msg(&unknown, "No Post found");
    assert_eq!(malformed.status_code(), StatusCode::NOT_FOUND);
    assert_msg(&malformed, "No Post found");
}

#[tokio::test]
async fn test_delete_post_owner_only() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;
    let sam = register_user(&app.server, "Sam").await;
    let post = create_post(&app.server, &jane, "mine").await;

    let (name, value) = sam.header();
    let denied = app
        .server
        .delete(&post_path("/api/posts", &post))
        .add_header(name, value)
        .await;
    assert_eq!(denied.status_code(), StatusCode::UNAUTHORIZED);
    assert_msg(&denied, "User not authorized");

    let (name, value) = jane.header();
    let removed = app
        .server
        .delete(&post_path("/api/posts", &post))
        .add_header(name, value)
        .await;
    assert_eq!(removed.status_code(), StatusCode::OK);
    assert_msg(&removed, "Post Removed");

    // Existence is checked before ownership
    let (name, value) = sam.header();
    let gone = app
        .server
        .delete(&post_path("/api/posts", &post))
        .add_header(name, value)
        .await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_twice() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;
    let post = create_post(&app.server, &jane, "like me").await;

    let first = like(&app, &jane, &post).await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let likes: Vec<Value> = first.json();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0]["user"], jane.id.to_string());

    let second = like(&app, &jane, &post).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    assert_msg(&second, "Post already liked");

    let (name, value) = jane.header();
    let stored: Value = app
        .server
        .get(&post_path("/api/posts", &post))
        .add_header(name, value)
        .await
        .json();
    assert_eq!(stored["likes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unlike_not_liked() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;
    let post = create_post(&app.server, &jane, "text").await;
    let (name, value) = jane.header();

    let response = app
        .server
        .put(&post_path("/api/posts/unlike", &post))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_msg(&response, "Post has not yet been liked");
}

#[tokio::test]
async fn test_unlike_removes_only_callers_like() {
    let app = spawn_app();
    let a = register_user(&app.server, "A").await;
    let b = register_user(&app.server, "B").await;
    let c = register_user(&app.server, "C").await;
    let post = create_post(&app.server, &a, "popular").await;

    // Likes are prepended, so liking C, B, A yields [A, B, C]
    for user in [&c, &b, &a] {
        assert_eq!(like(&app, user, &post).await.status_code(), StatusCode::OK);
    }

    let (name, value) = b.header();
    let likes: Vec<Value> = app
        .server
        .put(&post_path("/api/posts/unlike", &post))
        .add_header(name, value)
        .await
        .json();

    let owners: Vec<String> = likes
        .iter()
        .map(|l| l["user"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(owners, vec![a.id.to_string(), c.id.to_string()]);
}

#[tokio::test]
async fn test_comment_and_delete_comment() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;
    let sam = register_user(&app.server, "Sam").await;
    let post = create_post(&app.server, &jane, "discuss").await;

    let (name, value) = sam.header();
    let comments: Vec<Value> = app
        .server
        .post(&post_path("/api/posts/comment", &post))
        .add_header(name, value)
        .json(&json!({ "text": "Nice" }))
        .await
        .json();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["name"], "Sam");
    assert_eq!(comments[0]["user"], sam.id.to_string());
    let comment_path = format!(
        "{}/{}",
        post_path("/api/posts/comment", &post),
        comments[0]["id"].as_str().unwrap()
    );

    let (name, value) = jane.header();
    let denied = app.server.delete(&comment_path).add_header(name, value).await;
    assert_eq!(denied.status_code(), StatusCode::UNAUTHORIZED);
    assert_msg(&denied, "User not authorized");

    let (name, value) = sam.header();
    let removed = app.server.delete(&comment_path).add_header(name, value).await;
    assert_eq!(removed.status_code(), StatusCode::OK);
    assert_eq!(removed.json::<Value>(), json!([]));

    let (name, value) = sam.header();
    let missing = app.server.delete(&comment_path).add_header(name, value).await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_msg(&missing, "Comment does not exist");
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;
    let (name, value) = jane.header();

    let response = app
        .server
        .post(&format!("/api/posts/comment/{}", Uuid::new_v4()))
        .add_header(name, value)
        .json(&json!({ "text": "hello?" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_msg(&response, "No Post found");
}

/// Concurrent likes are read-modify-write on the whole document; the last
/// save wins and an earlier like is lost.
#[tokio::test]
async fn test_concurrent_likes_last_write_wins() {
    let app = spawn_app();
    let jane = register_user(&app.server, "Jane").await;
    let post = create_post(&app.server, &jane, "racy").await;
    let id = Uuid::parse_str(post["id"].as_str().unwrap()).unwrap();

    let mut first = app.store.find_post(id).await.unwrap().unwrap();
    let mut second = app.store.find_post(id).await.unwrap().unwrap();
    first.like(Uuid::new_v4()).unwrap();
    second.like(Uuid::new_v4()).unwrap();
    app.store.save_post(&first).await.unwrap();
    app.store.save_post(&second).await.unwrap();

    let stored = app.store.find_post(id).await.unwrap().unwrap();
    assert_eq!(stored.likes.len(), 1);
    assert_eq!(stored.likes, second.likes);
}
