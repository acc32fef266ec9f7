//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the summary cache against arbitrary operation sequences.

use proptest::prelude::*;

use crate::cache::{summary_cache_key, SummaryCache};

// == Test Configuration ==
const TEST_TTL: u64 = 3600;

// == Strategies ==
/// Generates search terms, including spaces and non-ASCII letters
fn term_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 áčěřšžý]{1,32}".prop_map(|s| s)
}

/// Generates primary language subtags
fn language_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,3}".prop_map(|s| s)
}

/// Generates non-empty summaries
fn summary_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,]{1,256}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { term: String, language: String, summary: String },
    Get { term: String, language: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (term_strategy(), language_strategy(), summary_strategy())
            .prop_map(|(term, language, summary)| CacheOp::Set { term, language, summary }),
        (term_strategy(), language_strategy())
            .prop_map(|(term, language)| CacheOp::Get { term, language }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Hit and miss counters match the outcome of every get in the sequence.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = SummaryCache::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { term, language, summary } => {
                    cache.set(summary_cache_key(&term, &language), summary, TEST_TTL);
                }
                CacheOp::Get { term, language } => {
                    match cache.get(&summary_cache_key(&term, &language)) {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, cache.len(), "Total entries mismatch");
    }

    // A stored summary is returned unchanged before it expires.
    #[test]
    fn prop_roundtrip_storage(
        term in term_strategy(),
        language in language_strategy(),
        summary in summary_strategy()
    ) {
        let mut cache = SummaryCache::new();
        let key = summary_cache_key(&term, &language);

        cache.set(key.clone(), summary.clone(), TEST_TTL);

        prop_assert_eq!(cache.get(&key), Some(summary), "Round-trip value mismatch");
    }

    // The last write for a key wins and leaves a single entry.
    #[test]
    fn prop_last_write_wins(
        term in term_strategy(),
        language in language_strategy(),
        first in summary_strategy(),
        second in summary_strategy()
    ) {
        let mut cache = SummaryCache::new();
        let key = summary_cache_key(&term, &language);

        cache.set(key.clone(), first, TEST_TTL);
        cache.set(key.clone(), second.clone(), TEST_TTL);

        prop_assert_eq!(cache.get(&key), Some(second), "Overwrite should return new value");
        prop_assert_eq!(cache.len(), 1, "Should have exactly one entry after overwrite");
    }

    // A summary cached under one language never answers another language.
    #[test]
    fn prop_language_scoping(
        term in term_strategy(),
        cached in language_strategy(),
        requested in language_strategy(),
        summary in summary_strategy()
    ) {
        prop_assume!(cached != requested);
        let mut cache = SummaryCache::new();

        cache.set(summary_cache_key(&term, &cached), summary, TEST_TTL);

        prop_assert!(cache.get(&summary_cache_key(&term, &requested)).is_none());
    }
}
