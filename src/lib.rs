//! Gist Proxy - A caching proxy for the GitHub Gists API
//!
//! Serves a GitHub user's public gists through a bounded in-memory TTL
//! cache with FIFO eviction and a periodic expiry sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweeper;
