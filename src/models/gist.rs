//! Gist data model
//!
//! Typed representation of the GitHub Gists API payload. The proxy passes
//! these through to clients and stores them in the cache as-is.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single file within a gist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GistFile {
    pub filename: String,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub language: Option<String>,
    pub raw_url: String,
    pub size: u64,
}

/// Simplified owner information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GistOwner {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
}

/// A GitHub gist as returned by the list endpoint.
///
/// Fields GitHub omits for anonymous gists (owner) or optional metadata
/// (description, truncated) are modeled as such so deserialization never
/// fails on a valid API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gist {
    pub id: String,
    pub url: String,
    pub html_url: String,
    pub description: Option<String>,
    pub public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: u32,
    pub files: HashMap<String, GistFile>,
    pub owner: Option<GistOwner>,
    #[serde(default)]
    pub truncated: bool,
}
