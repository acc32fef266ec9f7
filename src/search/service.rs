//! Lookup Service
//!
//! Decides how a search term is answered: from the cache, with a summary,
//! with a list of candidate articles, or not at all.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::cache::{summary_cache_key, SummaryCache};
use crate::error::{LookupError, Result};
use crate::models::SearchRequest;
use crate::provider::EncyclopediaProvider;
use crate::search::SearchOutcome;

/// Case-insensitive comparison of the requested term and a candidate title.
///
/// Only letter case is folded; diacritics and whitespace must match as given.
pub fn is_exact_match(term: &str, candidate: &str) -> bool {
    term.to_lowercase() == candidate.to_lowercase()
}

/// Resolves search requests against a provider, caching summaries.
#[derive(Clone)]
pub struct LookupService {
    provider: Arc<dyn EncyclopediaProvider>,
    cache: Arc<RwLock<SummaryCache>>,
    summary_ttl: u64,
}

impl LookupService {
    pub fn new(
        provider: Arc<dyn EncyclopediaProvider>,
        cache: Arc<RwLock<SummaryCache>>,
        summary_ttl: u64,
    ) -> Self {
        Self {
            provider,
            cache,
            summary_ttl,
        }
    }

    /// Answers one request. Provider failures are folded into the outcome.
    pub async fn lookup(&self, request: &SearchRequest) -> SearchOutcome {
        let key = summary_cache_key(&request.term, &request.language);

        // Write lock: a read updates stats and may drop an expired entry
        let cached = self.cache.write().await.get(&key);
        if let Some(summary) = cached {
            debug!(term = %request.term, language = %request.language, "Summary served from cache");
            return SearchOutcome::Resolved(summary);
        }

        match self.resolve(request, key).await {
            Ok(outcome) => outcome,
            Err(err) => {
                log_failure(request, &err);
                SearchOutcome::from(err)
            }
        }
    }

    async fn resolve(&self, request: &SearchRequest, key: String) -> Result<SearchOutcome> {
        let results = self
            .provider
            .search(&request.term, &request.language)
            .await?;

        let Some(top) = results.first() else {
            debug!(term = %request.term, language = %request.language, "No search results");
            return Ok(SearchOutcome::NotFound);
        };

        if !is_exact_match(&request.term, top) {
            return Ok(SearchOutcome::Ambiguous(results));
        }

        let summary = self
            .provider
            .summary(&request.term, &request.language)
            .await?;

        // Not held across the provider calls above; concurrent misses race and the last write wins
        self.cache
            .write()
            .await
            .set(key, summary.clone(), self.summary_ttl);
        info!(term = %request.term, language = %request.language, "Summary resolved and cached");

        Ok(SearchOutcome::Resolved(summary))
    }
}

fn log_failure(request: &SearchRequest, err: &LookupError) {
    match err {
        LookupError::Disambiguation { options, .. } => {
            debug!(term = %request.term, candidates = options.len(), "Term is ambiguous");
        }
        LookupError::PageNotFound(_) => {
            error!("Page not found for search term {:?}: {}", request.term, err);
        }
        _ => {
            error!("Unexpected error while searching for {:?}: {}", request.term, err);
        }
    }
}
