/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * Applied to every route, outermost first:
 * 1. `TraceLayer` - one span per request with method, path and status
 * 2. `CorsLayer::permissive()` - the browser client is served from another origin
 */

use axum::{http::StatusCode, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (config, tokens, store)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// ## Fallback
///
/// Unknown routes return 404 with a `{msg}` body.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(health));

    let router = configure_api_routes(router, app_state.clone());

    let router = router.fallback(|| async {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "msg": "Not Found" })),
        )
    });

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

/// GET /
async fn health() -> &'static str {
    "API Running"
}
