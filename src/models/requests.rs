//! Request DTOs for the gist proxy API
//!
//! Defines the query parameters accepted by the gist listing endpoint.

use serde::Deserialize;

/// Query parameters for the gist listing endpoint (GET /gists/:username)
///
/// # Fields
/// - `page`: Page number, 1-indexed (default: 1)
/// - `per_page`: Gists per page (default and maximum come from configuration)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GistQuery {
    /// Page number (1-indexed)
    pub page: Option<u32>,
    /// Number of gists per page
    pub per_page: Option<u32>,
}

impl GistQuery {
    /// Validates the query against the configured page-size bound.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self, max_per_page: u32) -> Option<String> {
        if matches!(self.page, Some(0)) {
            return Some("page must be at least 1".to_string());
        }
        match self.per_page {
            Some(0) => Some("per_page must be at least 1".to_string()),
            Some(n) if n > max_per_page => {
                Some(format!("per_page must not exceed {}", max_per_page))
            }
            _ => None,
        }
    }

    /// Resolved page number.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Resolved page size.
    pub fn per_page(&self, default_per_page: u32) -> u32 {
        self.per_page.unwrap_or(default_per_page)
    }
}
