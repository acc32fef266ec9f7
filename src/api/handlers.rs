//! API Handlers
//!
//! HTTP request handler for the search endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
};

use crate::cache::SummaryCache;
use crate::config::Config;
use crate::models::SearchRequest;
use crate::provider::EncyclopediaProvider;
use crate::search::{LookupService, SearchOutcome};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Summary cache, shared with the cleanup task
    pub cache: Arc<RwLock<SummaryCache>>,
    /// Lookup logic over the provider and the cache
    pub lookup: LookupService,
}

impl AppState {
    /// Creates a new AppState with an empty cache.
    pub fn new(provider: Arc<dyn EncyclopediaProvider>, summary_ttl: u64) -> Self {
        let cache = Arc::new(RwLock::new(SummaryCache::new()));
        let lookup = LookupService::new(provider, cache.clone(), summary_ttl);
        Self { cache, lookup }
    }

    /// Creates a new AppState using the configured summary TTL.
    pub fn from_config(config: &Config, provider: Arc<dyn EncyclopediaProvider>) -> Self {
        Self::new(provider, config.summary_ttl)
    }
}

/// Handler for GET /:search_term
///
/// Looks the term up in the language named by `Accept-Language`.
pub async fn search_handler(
    State(state): State<AppState>,
    Path(search_term): Path<String>,
    headers: HeaderMap,
) -> SearchOutcome {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let request = SearchRequest::new(search_term, accept_language);

    state.lookup.lookup(&request).await
}
