/**
 * Server Initialization
 *
 * This module builds the Axum application from the configuration and
 * serves it until a shutdown signal arrives.
 *
 * # Initialization Process
 *
 * 1. Load the document store (PostgreSQL or in-memory)
 * 2. Create the application state (token service, HTTP client)
 * 3. Create and configure the router
 */

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::{AppState, Store};
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `sqlx::Error` if a database is configured but unreachable, or
/// its migrations fail.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing devconnect backend server");

    let store = load_store(&config).await?;
    let app = build_app(config, store);

    tracing::info!("Router configured");
    Ok(app)
}

/// Build the router over an already-constructed store
///
/// Used directly by the integration tests with a `MemoryStore`.
pub fn build_app(config: AppConfig, store: Store) -> Router<()> {
    create_router(AppState::new(config, store))
}

/// Bind `0.0.0.0:port` and serve `app` until Ctrl+C or SIGTERM
pub async fn serve(app: Router<()>, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
