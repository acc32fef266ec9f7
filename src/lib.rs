//! Wiki Search Proxy - localized encyclopedia lookups over HTTP
//!
//! Forwards a search term to Wikipedia in the caller's language, returns the
//! article summary on an exact match or the candidate titles otherwise, and
//! caches resolved summaries for an hour.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod search;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::LookupError;
pub use provider::{EncyclopediaProvider, WikipediaClient};
pub use search::{LookupService, SearchOutcome};
pub use tasks::spawn_cleanup_task;
