//! Search Outcome
//!
//! The result of one lookup and its HTTP rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::LookupError;
use crate::models::SearchResponse;

/// How a lookup ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term resolved to a summary, from the cache or the provider
    Resolved(String),
    /// Several articles match; candidates are in provider order
    Ambiguous(Vec<String>),
    /// The provider has no candidates for the term
    NotFound,
    /// The provider failed; never a disambiguation
    ProviderError(LookupError),
}

impl From<LookupError> for SearchOutcome {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::Disambiguation { options, .. } => SearchOutcome::Ambiguous(options),
            other => SearchOutcome::ProviderError(other),
        }
    }
}

impl SearchOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            SearchOutcome::Resolved(_) => StatusCode::OK,
            SearchOutcome::Ambiguous(_) => StatusCode::SEE_OTHER,
            SearchOutcome::NotFound => StatusCode::NOT_FOUND,
            SearchOutcome::ProviderError(LookupError::PageNotFound(_)) => StatusCode::NOT_FOUND,
            SearchOutcome::ProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SearchOutcome {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            SearchOutcome::Resolved(summary) => {
                (status, Json(SearchResponse::resolved(summary))).into_response()
            }
            SearchOutcome::Ambiguous(candidates) => {
                (status, Json(SearchResponse::ambiguous(candidates))).into_response()
            }
            SearchOutcome::NotFound => (status, Json(SearchResponse::not_found())).into_response(),
            SearchOutcome::ProviderError(err) => err.into_response(),
        }
    }
}
