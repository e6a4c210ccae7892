/**
 * Server Configuration
 *
 * This module turns the `database_url` of the application configuration
 * into a document store.
 *
 * # Store Selection
 *
 * - `database_url` unset: in-memory store, with a warning
 * - `database_url` set: PostgreSQL store, migrations applied on startup
 *
 * Unlike a missing URL, a URL that cannot be connected to is an error:
 * silently falling back to memory would lose every write.
 */

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::backend::server::state::Store;
use crate::backend::store::{MemoryStore, PgStore};
use crate::shared::AppConfig;

/// Load the document store selected by `config`
///
/// This function:
/// 1. Reads `database_url` from the configuration
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - A `PgStore` if a database URL is configured
/// - A `MemoryStore` if it is not
///
/// # Errors
///
/// Returns `sqlx::Error` if the pool cannot connect or migrations fail.
///
/// # Example
///
/// ```rust,no_run
/// use devconnect::backend::server::config::load_store;
/// use devconnect::shared::AppConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::builder().jwt_secret("secret").build()?;
/// let store = load_store(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_store(config: &AppConfig) -> Result<Store, sqlx::Error> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not survive a restart.");
        return Ok(Arc::new(MemoryStore::new()));
    };

    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            e
        })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        sqlx::Error::from(e)
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(PgStore::new(pool)))
}
