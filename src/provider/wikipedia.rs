//! Wikipedia Provider
//!
//! [`EncyclopediaProvider`] backed by the MediaWiki action API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::{Config, LANGUAGE_PLACEHOLDER};
use crate::error::{LookupError, Result};
use crate::provider::EncyclopediaProvider;

// == Wire Types ==
// Shapes of `action=query&format=json&formatversion=2` responses.

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    error: Option<ApiError>,
    query: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<TitleRef>,
    #[serde(default)]
    searchinfo: Option<SearchInfo>,
}

#[derive(Debug, Deserialize)]
struct SearchInfo {
    #[serde(default)]
    suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TitleRef {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    pageprops: Option<PageProps>,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    links: Vec<TitleRef>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    #[serde(default)]
    disambiguation: Option<serde_json::Value>,
}

/// What a page query says about a title.
#[derive(Debug, PartialEq, Eq)]
enum PageKind {
    Missing,
    Disambiguation,
    Article(String),
}

impl Page {
    fn kind(&self) -> PageKind {
        if self.missing || self.invalid {
            return PageKind::Missing;
        }
        let is_disambiguation = self
            .pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some());
        if is_disambiguation {
            return PageKind::Disambiguation;
        }
        PageKind::Article(self.extract.clone().unwrap_or_default())
    }
}

fn into_query<T>(response: ApiResponse<T>) -> Result<T> {
    if let Some(error) = response.error {
        return Err(LookupError::Api(format!("{} ({})", error.info, error.code)));
    }
    response
        .query
        .ok_or_else(|| LookupError::InvalidResponse("response has no query section".to_string()))
}

// == Wikipedia Client ==
/// MediaWiki client; the language picks the `{lang}` subdomain of the API URL.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    api_url: String,
    search_results: u32,
    auto_suggest: bool,
}

impl WikipediaClient {
    /// Builds a client with the configured endpoint, timeout and User-Agent.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            api_url: config.wiki_api_url.clone(),
            search_results: config.search_results,
            auto_suggest: config.auto_suggest,
        })
    }

    fn endpoint(&self, language: &str) -> String {
        self.api_url.replace(LANGUAGE_PLACEHOLDER, language)
    }

    /// Runs one `action=query` request and returns its `query` section.
    async fn query<T: DeserializeOwned>(&self, language: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint(language);
        debug!(%url, ?params, "Querying encyclopedia");

        let response = self
            .http
            .get(&url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Http(format!("HTTP {} from {}", status, url)));
        }

        into_query(response.json::<ApiResponse<T>>().await?)
    }

    async fn search_query(&self, term: &str, language: &str, limit: u32, suggestion: bool) -> Result<SearchQuery> {
        let limit = limit.to_string();
        let mut params = vec![
            ("list", "search"),
            ("srprop", ""),
            ("srlimit", limit.as_str()),
            ("srsearch", term),
        ];
        if suggestion {
            params.push(("srinfo", "suggestion"));
        }
        self.query(language, &params).await
    }

    /// Picks the title a summary is fetched for: the search suggestion if the
    /// provider offers one, otherwise the top hit.
    async fn suggest_title(&self, term: &str, language: &str) -> Result<String> {
        let query = self.search_query(term, language, 1, true).await?;
        let suggestion = query.searchinfo.and_then(|info| info.suggestion);

        suggestion
            .or_else(|| query.search.into_iter().next().map(|hit| hit.title))
            .ok_or_else(|| LookupError::PageNotFound(term.to_string()))
    }

    async fn disambiguation_options(&self, title: &str, language: &str) -> Result<Vec<String>> {
        let query: PageQuery = self
            .query(
                language,
                &[
                    ("prop", "links"),
                    ("plnamespace", "0"),
                    ("pllimit", "max"),
                    ("titles", title),
                ],
            )
            .await?;

        Ok(query
            .pages
            .into_iter()
            .flat_map(|page| page.links)
            .map(|link| link.title)
            .collect())
    }
}

#[async_trait]
impl EncyclopediaProvider for WikipediaClient {
    async fn search(&self, term: &str, language: &str) -> Result<Vec<String>> {
        let query = self
            .search_query(term, language, self.search_results, false)
            .await?;
        Ok(query.search.into_iter().map(|hit| hit.title).collect())
    }

    async fn summary(&self, term: &str, language: &str) -> Result<String> {
        let title = if self.auto_suggest {
            self.suggest_title(term, language).await?
        } else {
            term.to_string()
        };

        let query: PageQuery = self
            .query(
                language,
                &[
                    ("prop", "extracts|pageprops"),
                    ("ppprop", "disambiguation"),
                    ("exintro", "1"),
                    ("explaintext", "1"),
                    ("redirects", "1"),
                    ("titles", title.as_str()),
                ],
            )
            .await?;

        let page = query
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::PageNotFound(title.clone()))?;

        match page.kind() {
            PageKind::Missing => Err(LookupError::PageNotFound(page.title)),
            PageKind::Disambiguation => {
                let options = self.disambiguation_options(&page.title, language).await?;
                Err(LookupError::Disambiguation {
                    title: page.title,
                    options,
                })
            }
            PageKind::Article(extract) => Ok(extract),
        }
    }
}
