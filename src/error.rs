//! Error types for the gist proxy
//!
//! Provides unified error handling using thiserror, with each variant
//! mapped to the HTTP status the service exposes for it.

use axum::{
    http::{header::HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the gist proxy.
///
/// The cache itself never fails; everything here originates from request
/// validation or the upstream GitHub API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// GitHub user does not exist
    #[error("GitHub user '{0}' not found")]
    UserNotFound(String),

    /// GitHub API rate limit exhausted
    #[error("GitHub API rate limit exceeded")]
    RateLimited {
        /// Epoch seconds at which the limit resets, when GitHub reported it
        reset: Option<String>,
    },

    /// Upstream request timed out
    #[error("GitHub API request timed out")]
    UpstreamTimeout,

    /// Any other upstream failure (non-200 status, transport, bad payload)
    #[error("GitHub API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message, detail) = match &self {
            ApiError::UserNotFound(username) => (
                StatusCode::NOT_FOUND,
                "user_not_found",
                format!("GitHub user '{}' not found", username),
                Some("The specified username does not exist on GitHub".to_string()),
            ),
            ApiError::RateLimited { reset } => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limit_exceeded",
                "GitHub API rate limit exceeded".to_string(),
                reset.as_ref().map(|r| format!("Rate limit resets at: {}", r)),
            ),
            ApiError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "github_api_error",
                "GitHub API request timed out".to_string(),
                None,
            ),
            ApiError::Upstream { message, .. } => (
                StatusCode::BAD_GATEWAY,
                "github_api_error",
                "Error communicating with GitHub API".to_string(),
                Some(message.clone()),
            ),
            ApiError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "invalid_request",
                msg.clone(),
                None,
            ),
        };

        let body = Json(json!({
            "error": error,
            "message": message,
            "detail": detail,
        }));

        let mut response = (status, body).into_response();

        // Surface the reset time as a header too, mirroring GitHub's own
        if let ApiError::RateLimited { reset: Some(reset) } = &self {
            if let Ok(value) = HeaderValue::from_str(reset) {
                response.headers_mut().insert("X-RateLimit-Reset", value);
            }
        }

        response
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gist proxy.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found_maps_to_404() {
        let response = ApiError::UserNotFound("ghost".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rate_limited_maps_to_429_with_header() {
        let response = ApiError::RateLimited {
            reset: Some("1700000000".to_string()),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get("X-RateLimit-Reset").unwrap(),
            "1700000000"
        );
    }

    #[test]
    fn test_upstream_maps_to_502() {
        let response = ApiError::Upstream {
            status: 500,
            message: "boom".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_timeout_maps_to_504() {
        let response = ApiError::UpstreamTimeout.into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = ApiError::InvalidRequest("bad page".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
