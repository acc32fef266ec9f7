//! Request models for the search proxy
//!
//! Turns the path term and `Accept-Language` header into a [`SearchRequest`].

use tracing::warn;

/// Language used when the request does not name a usable one
pub const DEFAULT_LANGUAGE: &str = "en";

/// A search term paired with the primary language subtag it is looked up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// The search term exactly as it appeared in the path
    pub term: String,
    /// Primary language subtag, e.g. `en` or `cs`
    pub language: String,
}

impl SearchRequest {
    /// Builds a request from the path term and the raw `Accept-Language` value.
    pub fn new(term: impl Into<String>, accept_language: Option<&str>) -> Self {
        Self {
            term: term.into(),
            language: primary_language(accept_language),
        }
    }
}

/// Extracts the primary subtag of the first language in an `Accept-Language` value.
///
/// `"cs-CZ,cs;q=0.9,en;q=0.8"` yields `"cs"`. Absent, empty, or malformed
/// values fall back to [`DEFAULT_LANGUAGE`]. The tag ends up in the provider's
/// host name, so only ASCII letters and digits are accepted.
pub fn primary_language(header: Option<&str>) -> String {
    let Some(header) = header else {
        return DEFAULT_LANGUAGE.to_string();
    };

    let first = header.split(',').next().unwrap_or_default();
    let first = first.split(';').next().unwrap_or_default();
    let tag = first.split('-').next().unwrap_or_default().trim();

    if tag.is_empty() {
        return DEFAULT_LANGUAGE.to_string();
    }
    if !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        warn!("Ignoring malformed Accept-Language tag {:?}", tag);
        return DEFAULT_LANGUAGE.to_string();
    }

    tag.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_missing_header_defaults_to_english() {
        assert_eq!(primary_language(None), "en");
        assert_eq!(primary_language(Some("")), "en");
        assert_eq!(primary_language(Some("   ")), "en");
    }

    #[test]
    fn test_plain_tag() {
        assert_eq!(primary_language(Some("cs")), "cs");
    }

    #[test]
    fn test_region_is_dropped() {
        assert_eq!(primary_language(Some("en-US")), "en");
        assert_eq!(primary_language(Some("pt-BR")), "pt");
    }

    #[test]
    fn test_only_first_language_is_used() {
        assert_eq!(primary_language(Some("cs-CZ,cs;q=0.9,en;q=0.8")), "cs");
        assert_eq!(primary_language(Some("de;q=0.7, en")), "de");
    }

    #[test]
    fn test_leading_empty_segment_defaults() {
        assert_eq!(primary_language(Some(",cs")), "en");
    }

    #[test]
    fn test_host_injection_is_rejected() {
        assert_eq!(primary_language(Some("evil.example.com/")), "en");
        assert_eq!(primary_language(Some("*")), "en");
    }

    #[test]
    fn test_search_request_keeps_term_verbatim() {
        let req = SearchRequest::new("Rum Bellion", Some("cs"));
        assert_eq!(req.term, "Rum Bellion");
        assert_eq!(req.language, "cs");
    }

    proptest! {
        // Whatever follows the primary subtag does not change the result.
        #[test]
        fn prop_primary_subtag_extracted(
            lang in "[a-z]{2,3}",
            region in "[A-Z]{2}",
            rest in "(,[a-z]{2}(;q=0\\.[1-9])?){0,3}"
        ) {
            let header = format!("{}-{}{}", lang, region, rest);
            prop_assert_eq!(primary_language(Some(&header)), lang);
        }

        // The derived tag is always non-empty ASCII alphanumeric.
        #[test]
        fn prop_language_is_host_safe(header in ".{0,40}") {
            let lang = primary_language(Some(&header));
            prop_assert!(!lang.is_empty());
            prop_assert!(lang.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
