//! API Handlers
//!
//! HTTP request handlers for each gist proxy endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::github::GithubClient;
use crate::models::{Gist, GistListResponse, GistQuery, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache is guarded by a single async mutex: every mutating operation
/// (lookup with lazy expiry, insert, sweep) serializes on it, and the lock
/// is never held across the upstream fetch.
#[derive(Clone)]
pub struct AppState {
    /// Shared gist-page cache
    pub cache: Arc<Mutex<TtlCache<Vec<Gist>>>>,
    /// Upstream GitHub client
    pub github: GithubClient,
    /// Service configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: TtlCache<Vec<Gist>>, github: GithubClient, config: Config) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
            github,
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the cache and the GitHub client with parameters from the Config.
    pub fn from_config(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        let cache = TtlCache::new(config.cache_max_size, config.cache_ttl_secs);
        let github = GithubClient::new(config)?;
        Ok(Self::new(cache, github, config.clone()))
    }
}

// == Cache Key ==
/// Builds the cache key for a gist page request.
///
/// The username is lower-cased so lookups are case-insensitive; the cache
/// itself treats the result as an opaque string.
pub fn make_cache_key(username: &str, page: u32, per_page: u32) -> String {
    format!(
        "gists:{}:page={}:per_page={}",
        username.to_lowercase(),
        page,
        per_page
    )
}

/// Handler for GET /gists/:username
///
/// Serves a page of the user's public gists, from the cache when a live
/// entry exists, otherwise from the GitHub API.
///
/// Two concurrent requests that both miss the same key will both fetch and
/// both insert; the last insert wins. That duplicate upstream call is
/// accepted, the cache makes no single-flight guarantee.
pub async fn list_gists_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<GistQuery>,
) -> Result<Json<GistListResponse>> {
    if let Some(error_msg) = query.validate(state.config.max_per_page) {
        return Err(ApiError::InvalidRequest(error_msg));
    }
    let page = query.page();
    let per_page = query.per_page(state.config.default_per_page);

    let cache_key = make_cache_key(&username, page, per_page);

    // Lock held only for the synchronous lookup, never across the fetch
    let cached = {
        let mut cache = state.cache.lock().await;
        cache.get(&cache_key)
    };

    if let Some(entry) = cached {
        debug!(key = %cache_key, "serving gists from cache");
        return Ok(Json(GistListResponse::new(
            username,
            page,
            per_page,
            entry.value,
            true,
            entry.expires_at,
        )));
    }

    let gists = state.github.get_user_gists(&username, page, per_page).await?;

    // Only successful fetches are cached
    let expires_at = {
        let mut cache = state.cache.lock().await;
        cache.set(cache_key, gists.clone(), None)
    };

    Ok(Json(GistListResponse::new(
        username, page, per_page, gists, false, expires_at,
    )))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    let stats = cache.stats();

    Json(StatsResponse {
        hits: stats.hits,
        misses: stats.misses,
        evictions: stats.evictions,
        expired: stats.expired,
        entries: stats.entries,
        max_size: cache.max_size(),
        hit_rate: stats.hit_rate(),
    })
}

/// Handler for GET /health
///
/// Reports overall service health, including GitHub API reachability.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let reachable = state.github.check_health().await;
    Json(HealthResponse::from_probe(reachable))
}

/// Handler for GET /health/live
///
/// Liveness probe: returns 200 whenever the process is serving requests.
pub async fn liveness_handler() -> Json<Value> {
    Json(json!({ "status": "alive" }))
}

/// Handler for GET /health/ready
///
/// Readiness probe: reflects whether the upstream dependency is reachable.
pub async fn readiness_handler(State(state): State<AppState>) -> Json<Value> {
    if state.github.check_health().await {
        Json(json!({ "status": "ready" }))
    } else {
        Json(json!({ "status": "not_ready", "reason": "GitHub API unreachable" }))
    }
}
