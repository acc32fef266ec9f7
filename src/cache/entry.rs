//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// A cached summary together with its expiry time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached summary text
    pub value: String,
    /// When the entry stops being served
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that lives for `ttl_seconds` from now.
    pub fn new(value: String, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        let expires_at = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches `expires_at`, so a
    /// zero TTL is never served.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
