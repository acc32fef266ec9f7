//! Request and Response models for the search proxy
//!
//! This module defines the DTOs (Data Transfer Objects) exchanged over HTTP
//! and the request value handed to the lookup service.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{primary_language, SearchRequest, DEFAULT_LANGUAGE};
pub use responses::{Article, ErrorResponse, SearchResponse};
