//! Error types for the search proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, SearchResponse};

// == Lookup Error Enum ==
/// Failures reported by the encyclopedia provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The term matches several distinct articles
    #[error("\"{title}\" may refer to: {}", .options.join(", "))]
    Disambiguation { title: String, options: Vec<String> },

    /// The provider has no page for the title
    #[error("\"{0}\" does not match any pages. Try another query!")]
    PageNotFound(String),

    /// The provider answered with an API-level error
    #[error("Encyclopedia API error: {0}")]
    Api(String),

    /// Transport failure or timeout talking to the provider
    #[error("Request to the encyclopedia failed: {0}")]
    Http(String),

    /// The provider answered with a body we could not understand
    #[error("Invalid response from the encyclopedia: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::InvalidResponse(err.to_string())
        } else {
            LookupError::Http(err.to_string())
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        match self {
            LookupError::Disambiguation { options, .. } => (
                StatusCode::SEE_OTHER,
                Json(SearchResponse::ambiguous(options)),
            )
                .into_response(),
            LookupError::PageNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Page not found.")),
            )
                .into_response(),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(other.to_string())),
            )
                .into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for provider calls.
pub type Result<T> = std::result::Result<T, LookupError>;
