//! Response DTOs for the search proxy
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// A candidate article offered when a term does not resolve to a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Article title as reported by the provider
    pub name: String,
}

/// Body for the search endpoint (GET /:search_term).
///
/// `result` is always present, `null` unless a summary was resolved.
/// `articles` appears only for ambiguous lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<Article>>,
}

impl SearchResponse {
    /// A resolved summary
    pub fn resolved(summary: impl Into<String>) -> Self {
        Self {
            result: Some(summary.into()),
            articles: None,
        }
    }

    /// Candidate titles, in the order the provider returned them
    pub fn ambiguous<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            result: None,
            articles: Some(
                titles
                    .into_iter()
                    .map(|name| Article { name: name.into() })
                    .collect(),
            ),
        }
    }

    /// No article matched the term
    pub fn not_found() -> Self {
        Self {
            result: None,
            articles: None,
        }
    }
}

/// Error response body for provider failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolved_serialize() {
        let resp = SearchResponse::resolved("Rum je alkoholický nápoj");
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "result": "Rum je alkoholický nápoj" })
        );
    }

    #[test]
    fn test_not_found_serializes_null_result() {
        let resp = SearchResponse::not_found();
        assert_eq!(serde_json::to_value(&resp).unwrap(), json!({ "result": null }));
    }

    #[test]
    fn test_ambiguous_preserves_order() {
        let resp = SearchResponse::ambiguous(["Rum", "Rumbellion", "Rum baba"]);
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "result": null,
                "articles": [{ "name": "Rum" }, { "name": "Rumbellion" }, { "name": "Rum baba" }]
            })
        );
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Page not found.");
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "error": "Page not found." })
        );
    }
}
