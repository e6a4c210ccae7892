//! Database test fixtures
//!
//! The PostgreSQL tests run against `DATABASE_URL`. When it is unset they
//! skip instead of failing, so the suite still passes without a database.

use devconnect::backend::server::config::load_store;
use devconnect::backend::server::state::Store;
use sqlx::PgPool;

use super::test_config_builder;

/// Connect, migrate through `load_store` and empty every table
///
/// Returns `None` when no database is configured.
pub async fn test_store() -> Option<Store> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    let config = test_config_builder()
        .database_url(database_url.clone())
        .build()
        .expect("test config");
    let store = load_store(&config)
        .await
        .expect("Failed to connect and migrate test database");

    cleanup_test_data(&database_url).await;
    Some(store)
}

async fn cleanup_test_data(database_url: &str) {
    let pool = PgPool::connect(database_url)
        .await
        .expect("Failed to create test database pool");
    sqlx::query("TRUNCATE TABLE users, profiles, posts")
        .execute(&pool)
        .await
        .expect("Failed to clean test data");
    pool.close().await;
}
