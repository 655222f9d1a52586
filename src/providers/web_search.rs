//! Google Custom Search JSON API client, restricted to one site.
//!
//! See: <https://developers.google.com/custom-search/v1/reference/rest/v1/cse/list>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::traits::WebSearchProvider;
use crate::types::SearchItem;
use crate::{ClaimCheckError, Result};

/// Default Custom Search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Default search engine ID (a BBC-only engine).
pub const DEFAULT_CX: &str = "82df0b1d5b58748fb";

/// Default site restriction.
pub const DEFAULT_SITE: &str = "bbc.com";

/// Results requested per query. The API caps `num` at 10.
pub const DEFAULT_NUM_RESULTS: u8 = 5;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for site-restricted web search.
#[derive(Clone)]
pub struct CustomSearchClient {
    api_key: String,
    cx: String,
    http: Client,
    endpoint: String,
    site: String,
    num: u8,
}

impl CustomSearchClient {
    /// Create a client for the public endpoint.
    pub fn new(api_key: impl Into<String>, cx: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(api_key, cx, DEFAULT_ENDPOINT)
    }

    /// Create a client with a custom endpoint URL (for testing with wiremock).
    pub fn with_endpoint(
        api_key: impl Into<String>,
        cx: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self> {
        Self::with_timeout(
            api_key,
            cx,
            endpoint,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a client with a custom endpoint and request timeout.
    pub fn with_timeout(
        api_key: impl Into<String>,
        cx: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            ClaimCheckError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            api_key: api_key.into(),
            cx: cx.into(),
            http,
            endpoint: endpoint.into(),
            site: DEFAULT_SITE.to_string(),
            num: DEFAULT_NUM_RESULTS,
        })
    }

    /// Restrict results to a different domain.
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Number of results to request (clamped to 1..=10).
    pub fn num_results(mut self, num: u8) -> Self {
        self.num = num.clamp(1, 10);
        self
    }

    /// Search pages on the configured site.
    ///
    /// Returns at most `num` items in service order. Non-success statuses
    /// are returned as [`ClaimCheckError::Api`]; connection failures and
    /// timeouts as [`ClaimCheckError::Http`] / [`ClaimCheckError::Timeout`].
    pub async fn search(&self, query: &str) -> Result<Vec<SearchItem>> {
        let num = self.num.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
                ("siteSearch", self.site.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClaimCheckError::Api {
                status: status.as_u16(),
                message: format!("custom search API error: {status}"),
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!(items = body.items.len(), site = %self.site, "web search complete");

        Ok(body
            .items
            .into_iter()
            .take(usize::from(self.num))
            .map(SearchItem::from)
            .collect())
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

impl From<RawItem> for SearchItem {
    fn from(raw: RawItem) -> Self {
        Self {
            title: raw.title,
            url: raw.link,
            snippet: raw.snippet,
        }
    }
}

// ============================================================================
// Provider Trait Implementation
// ============================================================================

#[async_trait]
impl WebSearchProvider for CustomSearchClient {
    fn name(&self) -> &str {
        "google-custom-search"
    }

    fn site(&self) -> &str {
        &self.site
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchItem>> {
        CustomSearchClient::search(self, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_without_snippet_defaults_to_empty() {
        let json = r#"{"items": [{"title": "T", "link": "https://www.bbc.com/news/1"}]}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        let item = SearchItem::from(parsed.items.into_iter().next().unwrap());
        assert_eq!(item.url, "https://www.bbc.com/news/1");
        assert_eq!(item.snippet, "");
    }

    #[test]
    fn num_results_is_clamped() {
        let client = CustomSearchClient::new("k", "cx").unwrap().num_results(50);
        assert_eq!(client.num, 10);
        let client = CustomSearchClient::new("k", "cx").unwrap().num_results(0);
        assert_eq!(client.num, 1);
    }
}
