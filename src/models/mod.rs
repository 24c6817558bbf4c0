//! Request and Response models for the gist proxy API
//!
//! This module defines the gist payload types and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod gist;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use gist::{Gist, GistFile, GistOwner};
pub use requests::GistQuery;
pub use responses::{GistListResponse, HealthResponse, StatsResponse};
