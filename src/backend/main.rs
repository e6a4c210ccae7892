/**
 * DevConnect Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the API until
 * Ctrl+C or SIGTERM.
 */

use devconnect::backend::server::{create_app, serve};
use devconnect::shared::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("devconnect=debug,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;
    let port = config.server_port;

    let app = create_app(config).await?;
    serve(app, port).await?;

    Ok(())
}
