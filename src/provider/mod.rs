//! Encyclopedia Provider Module
//!
//! The external lookup service the proxy forwards searches to.
//!
//! The request language is an explicit argument on every call; providers hold
//! no per-request state and can be shared freely across handlers.

mod wikipedia;

use async_trait::async_trait;

use crate::error::Result;

pub use wikipedia::WikipediaClient;

/// Search and summary capabilities of an encyclopedia.
#[async_trait]
pub trait EncyclopediaProvider: Send + Sync {
    /// Returns candidate article titles for `term`, best match first.
    async fn search(&self, term: &str, language: &str) -> Result<Vec<String>>;

    /// Returns the plain-text summary of the article for `term`.
    ///
    /// Fails with [`LookupError::PageNotFound`](crate::error::LookupError::PageNotFound)
    /// when no page exists and with
    /// [`LookupError::Disambiguation`](crate::error::LookupError::Disambiguation)
    /// when the page only lists other articles.
    async fn summary(&self, term: &str, language: &str) -> Result<String>;
}
