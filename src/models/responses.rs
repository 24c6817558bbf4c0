//! Response DTOs for the gist proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Gist;

/// Response body for the gist listing endpoint (GET /gists/:username)
#[derive(Debug, Clone, Serialize)]
pub struct GistListResponse {
    /// The requested username
    pub username: String,
    /// Page number served
    pub page: u32,
    /// Page size served
    pub per_page: u32,
    /// The gists on this page
    pub gists: Vec<Gist>,
    /// Whether this response was served from the cache
    pub cached: bool,
    /// When the cached copy of this page stops being served
    pub cache_expires_at: Option<DateTime<Utc>>,
}

impl GistListResponse {
    /// Creates a response, converting the cache's millisecond expiry
    /// timestamp into an RFC 3339 field.
    pub fn new(
        username: String,
        page: u32,
        per_page: u32,
        gists: Vec<Gist>,
        cached: bool,
        expires_at_ms: u64,
    ) -> Self {
        Self {
            username,
            page,
            per_page,
            gists,
            cached,
            cache_expires_at: DateTime::from_timestamp_millis(expires_at_ms as i64),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Number of expired-entry removals
    pub expired: u64,
    /// Current structural entry count
    pub entries: usize,
    /// Configured capacity bound
    pub max_size: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status ("healthy" or "degraded")
    pub status: String,
    /// Crate version
    pub version: String,
    /// Whether the GitHub API responded to a probe
    pub github_api_reachable: bool,
}

impl HealthResponse {
    /// Creates a HealthResponse from a GitHub reachability probe.
    pub fn from_probe(github_api_reachable: bool) -> Self {
        Self {
            status: if github_api_reachable {
                "healthy".to_string()
            } else {
                "degraded".to_string()
            },
            version: env!("CARGO_PKG_VERSION").to_string(),
            github_api_reachable,
        }
    }
}
