//! GitHub API Client
//!
//! Async client for the GitHub Gists API, built on reqwest. Translates
//! upstream HTTP outcomes into the service's error taxonomy; the caching
//! layer never sees a raw transport error.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use tracing::warn;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::Gist;

// == GitHub Client ==
/// Async client for the GitHub Gists API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    // == Constructor ==
    /// Builds a client from configuration.
    ///
    /// Applies the GitHub media-type headers, the configured timeout and,
    /// when present, the bearer token. A token that is not a valid header
    /// value is skipped with a warning rather than failing startup.
    pub fn new(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        if let Some(token) = &config.github_token {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Ignoring GITHUB_TOKEN with invalid header characters"),
            }
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.github_api_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.github_api_url.trim_end_matches('/').to_string(),
        })
    }

    // == Get User Gists ==
    /// Fetches one page of public gists for a GitHub user.
    ///
    /// # Arguments
    /// * `username` - GitHub username
    /// * `page` - Page number (1-indexed)
    /// * `per_page` - Number of results per page
    ///
    /// # Errors
    /// - `UserNotFound` if the user doesn't exist (404)
    /// - `RateLimited` if the rate limit is exhausted (403 with zero remaining)
    /// - `UpstreamTimeout` if the request times out
    /// - `Upstream` for any other API or transport failure
    pub async fn get_user_gists(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Gist>> {
        let url = format!("{}/users/{}/gists", self.base_url, username);
        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .map_err(map_transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::UserNotFound(username.to_string())),
            StatusCode::FORBIDDEN => {
                if header_value(&response, "X-RateLimit-Remaining").as_deref() == Some("0") {
                    Err(ApiError::RateLimited {
                        reset: header_value(&response, "X-RateLimit-Reset"),
                    })
                } else {
                    Err(ApiError::Upstream {
                        status: 403,
                        message: "Access forbidden".to_string(),
                    })
                }
            }
            status if status.is_success() => {
                response.json::<Vec<Gist>>().await.map_err(|err| {
                    if err.is_timeout() {
                        ApiError::UpstreamTimeout
                    } else {
                        ApiError::Upstream {
                            status: 502,
                            message: format!("Malformed GitHub API response: {}", err),
                        }
                    }
                })
            }
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Upstream {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    // == Check Health ==
    /// Probes whether the GitHub API is reachable.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/rate_limit", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

/// Maps a reqwest transport error onto the service taxonomy.
fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::UpstreamTimeout
    } else {
        ApiError::Upstream {
            status: 502,
            message: format!("Failed to connect to GitHub API: {}", err),
        }
    }
}

/// Reads a response header as an owned string, if present and valid UTF-8.
fn header_value(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}
