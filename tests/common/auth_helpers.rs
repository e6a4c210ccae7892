//! Authentication test helpers
//!
//! Utilities for registering users through the API and attaching their
//! tokens to requests.

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use devconnect::backend::middleware::AUTH_HEADER;
use serde_json::json;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "secret123";

/// A registered user
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl TestUser {
    /// `x-auth-token` header for this user
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        auth_header(&self.token)
    }
}

/// Build the `x-auth-token` header
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(AUTH_HEADER),
        HeaderValue::from_str(token).expect("token is valid header text"),
    )
}

/// Register `name` with a unique email and resolve the new user's id
pub async fn register_user(server: &TestServer, name: &str) -> TestUser {
    let email = format!("{}_{}@example.com", name.to_lowercase(), Uuid::new_v4().simple());
    register_with_email(server, name, &email).await
}

pub async fn register_with_email(server: &TestServer, name: &str, email: &str) -> TestUser {
    let response = server
        .post("/api/users")
        .json(&json!({ "name": name, "email": email, "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), 200, "register failed: {}", response.text());

    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().expect("token in response").to_string();

    let (name_h, value_h) = auth_header(&token);
    let me: serde_json::Value = server.get("/api/auth").add_header(name_h, value_h).await.json();
    let id = me["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("user id in /api/auth");

    TestUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        token,
    }
}

/// Create a minimal profile for `user`
pub async fn create_profile(server: &TestServer, user: &TestUser) -> serde_json::Value {
    let (name, value) = user.header();
    let response = server
        .post("/api/profile")
        .add_header(name, value)
        .json(&json!({ "status": "Developer", "skills": "rust, sql" }))
        .await;
    assert_eq!(response.status_code(), 200, "profile failed: {}", response.text());
    response.json()
}

/// Create a post by `user` and return it
pub async fn create_post(server: &TestServer, user: &TestUser, text: &str) -> serde_json::Value {
    let (name, value) = user.header();
    let response = server
        .post("/api/posts")
        .add_header(name, value)
        .json(&json!({ "text": text }))
        .await;
    assert_eq!(response.status_code(), 200, "post failed: {}", response.text());
    response.json()
}
