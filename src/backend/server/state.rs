/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The immutable `AppConfig` built at startup
 * - The `TokenService` used by the auth guard and the auth handlers
 * - The document store behind `Arc<dyn DocumentStore>`
 * - A shared `reqwest::Client` for the GitHub proxy
 *
 * Every field is cheap to clone; cloning `AppState` shares the same store
 * and connection pools.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use devconnect::backend::server::state::AppState;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let posts = state.store.list_posts().await;
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenService;
use crate::backend::store::DocumentStore;
use crate::shared::AppConfig;

/// Shared document store handle
pub type Store = Arc<dyn DocumentStore>;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Startup configuration (read-only)
    pub config: Arc<AppConfig>,

    /// Token issuing and verification
    pub tokens: TokenService,

    /// User, profile and post documents
    pub store: Store,

    /// Outbound HTTP client for the GitHub proxy
    pub http: reqwest::Client,
}

impl AppState {
    /// Assemble state from its parts
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration
    /// * `store` - Document store (memory or PostgreSQL)
    pub fn new(config: AppConfig, store: Store) -> Self {
        let tokens = TokenService::from_config(&config);
        Self {
            config: Arc::new(config),
            tokens,
            store,
            http: reqwest::Client::new(),
        }
    }
}

/// Implement FromRef for the token service
///
/// Lets the auth guard and auth handlers take `State<TokenService>`.
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Implement FromRef for the document store
impl FromRef<AppState> for Store {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
