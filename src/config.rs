//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the GitHub API
    pub github_api_url: String,
    /// Upstream request timeout in seconds
    pub github_api_timeout_secs: u64,
    /// Optional GitHub token for authenticated requests
    pub github_token: Option<String>,
    /// Maximum number of entries the cache can hold
    pub cache_max_size: usize,
    /// Default TTL in seconds for cached responses
    pub cache_ttl_secs: u64,
    /// Background sweep interval in seconds
    pub sweep_interval_secs: u64,
    /// Default page size for gist listings
    pub default_per_page: u32,
    /// Upper bound on the requested page size
    pub max_per_page: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `GITHUB_API_URL` - GitHub API base URL (default: https://api.github.com)
    /// - `GITHUB_API_TIMEOUT_SECS` - Upstream timeout in seconds (default: 10)
    /// - `GITHUB_TOKEN` - Optional bearer token for the GitHub API
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 1000)
    /// - `CACHE_TTL_SECS` - Cached response TTL in seconds (default: 300)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 60)
    /// - `DEFAULT_PER_PAGE` - Default gists per page (default: 30)
    /// - `MAX_PER_PAGE` - Maximum gists per page (default: 100)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            github_api_timeout_secs: env::var("GITHUB_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            cache_max_size: env::var("CACHE_MAX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            default_per_page: env::var("DEFAULT_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            max_per_page: env::var("MAX_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            github_api_url: "https://api.github.com".to_string(),
            github_api_timeout_secs: 10,
            github_token: None,
            cache_max_size: 1000,
            cache_ttl_secs: 300,
            sweep_interval_secs: 60,
            default_per_page: 30,
            max_per_page: 100,
        }
    }
}
