//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

/// Placeholder replaced by the request language in `wiki_api_url`.
pub const LANGUAGE_PLACEHOLDER: &str = "{lang}";

const DEFAULT_WIKI_API_URL: &str = "https://{lang}.wikipedia.org/w/api.php";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached summaries
    pub summary_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// MediaWiki API endpoint, with `{lang}` standing in for the language subdomain
    pub wiki_api_url: String,
    /// Timeout in seconds for each provider request
    pub request_timeout: u64,
    /// Maximum number of titles returned by a search
    pub search_results: u32,
    /// Resolve summary titles through the provider's search suggestion first
    pub auto_suggest: bool,
    /// User-Agent sent to the provider
    pub user_agent: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SUMMARY_TTL` - Summary cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `WIKI_API_URL` - API endpoint template (default: `https://{lang}.wikipedia.org/w/api.php`)
    /// - `REQUEST_TIMEOUT` - Provider request timeout in seconds (default: 10)
    /// - `SEARCH_RESULTS` - Titles per search (default: 10)
    /// - `WIKI_AUTO_SUGGEST` - Use search suggestions for summaries (default: true)
    /// - `USER_AGENT` - User-Agent header (default: `wiki-search-proxy/<version>`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            summary_ttl: env_or("SUMMARY_TTL", defaults.summary_ttl),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            wiki_api_url: env::var("WIKI_API_URL").unwrap_or(defaults.wiki_api_url),
            request_timeout: env_or("REQUEST_TIMEOUT", defaults.request_timeout),
            search_results: env_or("SEARCH_RESULTS", defaults.search_results),
            auto_suggest: env_flag("WIKI_AUTO_SUGGEST", defaults.auto_suggest),
            user_agent: env::var("USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Provider request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    let Ok(raw) = env::var(name) else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        warn!("Ignoring unparseable {}={:?}, using default", name, raw);
        default
    })
}

fn env_flag(name: &str, default: bool) -> bool {
    let Ok(raw) = env::var(name) else {
        return default;
    };
    parse_flag(&raw).unwrap_or_else(|| {
        warn!("Ignoring unparseable {}={:?}, using default", name, raw);
        default
    })
}

/// Parses the usual spellings of an on/off switch.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            summary_ttl: 3600,
            cleanup_interval: 60,
            wiki_api_url: DEFAULT_WIKI_API_URL.to_string(),
            request_timeout: 10,
            search_results: 10,
            auto_suggest: true,
            user_agent: format!("wiki-search-proxy/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
