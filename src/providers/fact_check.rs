//! Google Fact Check Tools client (`claims:search`).
//!
//! See: <https://developers.google.com/fact-check/tools/api/reference/rest/v1alpha1/claims/search>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::traits::FactCheckProvider;
use crate::types::{ClaimReview, FactCheckClaim};
use crate::{ClaimCheckError, Result};

/// Default `claims:search` endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://factchecktools.googleapis.com/v1alpha1/claims:search";

/// Default language filter.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for the fact-check claim search API.
#[derive(Clone)]
pub struct FactCheckClient {
    api_key: String,
    http: Client,
    endpoint: String,
    language_code: String,
}

impl FactCheckClient {
    /// Create a client for the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Create a client with a custom endpoint URL (for testing with wiremock).
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom endpoint and request timeout.
    pub fn with_timeout(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            ClaimCheckError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            api_key: api_key.into(),
            http,
            endpoint: endpoint.into(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
        })
    }

    /// Restrict results to a BCP-47 language code.
    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = code.into();
        self
    }

    /// Search prior fact-checks for a statement.
    ///
    /// A response without a `claims` field means no matches. Any
    /// non-success status is returned as [`ClaimCheckError::Api`].
    pub async fn search_claims(&self, query: &str) -> Result<Vec<FactCheckClaim>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("key", self.api_key.as_str()),
                ("languageCode", self.language_code.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClaimCheckError::Api {
                status: status.as_u16(),
                message: format!("fact check API error: {status}"),
            });
        }

        let body: ClaimSearchResponse = response.json().await?;
        debug!(claims = body.claims.len(), "fact check search complete");

        Ok(body.claims.into_iter().map(FactCheckClaim::from).collect())
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Vec<RawClaim>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClaim {
    text: Option<String>,
    claimant: Option<String>,
    #[serde(default)]
    claim_review: Vec<RawClaimReview>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClaimReview {
    publisher: Option<RawPublisher>,
    url: Option<String>,
    textual_rating: Option<String>,
    review_date: Option<String>,
}

#[derive(Deserialize)]
struct RawPublisher {
    name: Option<String>,
}

impl From<RawClaim> for FactCheckClaim {
    fn from(raw: RawClaim) -> Self {
        Self {
            claim_text: raw
                .text
                .unwrap_or_else(|| "No claim text found.".to_string()),
            claimant: raw.claimant,
            reviews: raw.claim_review.into_iter().map(ClaimReview::from).collect(),
        }
    }
}

impl From<RawClaimReview> for ClaimReview {
    fn from(raw: RawClaimReview) -> Self {
        Self {
            rating: raw
                .textual_rating
                .unwrap_or_else(|| "No rating provided".to_string()),
            publisher: raw
                .publisher
                .and_then(|p| p.name)
                .unwrap_or_else(|| "Unknown publisher".to_string()),
            url: raw.url.unwrap_or_else(|| "#".to_string()),
            review_date: raw.review_date,
        }
    }
}

// ============================================================================
// Provider Trait Implementation
// ============================================================================

#[async_trait]
impl FactCheckProvider for FactCheckClient {
    fn name(&self) -> &str {
        "google-fact-check"
    }

    async fn search_claims(&self, query: &str) -> Result<Vec<FactCheckClaim>> {
        FactCheckClient::search_claims(self, query).await
    }
}
