//! Cache Module
//!
//! In-memory summary cache with per-entry TTL expiration.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::SummaryCache;

// == Public Constants ==
/// Prefix shared by every summary cache key
pub const SUMMARY_KEY_PREFIX: &str = "wikipedia_summary_";

// == Cache Key ==
/// Builds the cache key for a summary of `term` in `language`.
///
/// The language is part of the key so that a summary resolved for one
/// locale never answers a request in another.
pub fn summary_cache_key(term: &str, language: &str) -> String {
    format!("{}{}_{}", SUMMARY_KEY_PREFIX, term, language)
}
