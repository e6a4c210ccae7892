//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - An in-process test server over a fresh `MemoryStore`
//! - Authentication helpers (register, login, token headers)
//! - PostgreSQL fixtures for the store tests
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

use std::sync::Arc;

use axum_test::TestServer;
use devconnect::backend::auth::TokenService;
use devconnect::backend::server::build_app;
use devconnect::backend::MemoryStore;
use devconnect::shared::{AppConfig, AppConfigBuilder};

// Re-export commonly used utilities
pub use auth_helpers::*;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Config builder with a fixed secret and the cheapest bcrypt cost
pub fn test_config_builder() -> AppConfigBuilder {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .token_ttl_secs(3600)
}

/// Running app plus direct handles on its store and token service
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
    pub tokens: TokenService,
}

/// Start an app over an empty in-memory store
pub fn spawn_app() -> TestApp {
    spawn_app_with(test_config_builder().build().expect("test config"))
}

pub fn spawn_app_with(config: AppConfig) -> TestApp {
    let tokens = TokenService::from_config(&config);
    let store = Arc::new(MemoryStore::new());
    let app = build_app(config, store.clone());
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp {
        server,
        store,
        tokens,
    }
}
