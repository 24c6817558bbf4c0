//! API Routes
//!
//! Configures the Axum router with all gist proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, list_gists_handler, liveness_handler, readiness_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /gists/:username` - List a user's public gists (cached)
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check with upstream probe
/// - `GET /health/live` - Liveness probe
/// - `GET /health/ready` - Readiness probe
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/gists/:username", get(list_gists_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
