//! API Module
//!
//! HTTP handlers and routing for the gist proxy REST API.
//!
//! # Endpoints
//! - `GET /gists/:username` - List a user's public gists (cached)
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check with upstream probe
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
