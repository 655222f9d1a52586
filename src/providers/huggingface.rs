//! HuggingFace Inference API client for text classification.
//!
//! This client uses HuggingFace's serverless inference endpoints with a
//! fine-tuned sequence-classification model.
//! See: <https://huggingface.co/docs/api-inference/index>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::ClassifyProvider;
use crate::types::{Classification, DEFAULT_FALSE_LABELS};
use crate::{ClaimCheckError, Result};

/// Default base URL for HuggingFace Inference API
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// BERT fine-tuned on LIAR (binary true/false).
pub const DEFAULT_MODEL: &str = "TanishqRM3/BERT-fake-news-detector";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for HuggingFace text-classification inference.
#[derive(Clone)]
pub struct HuggingFaceClient {
    api_key: String,
    http: Client,
    base_url: String,
    model: String,
    false_labels: Vec<String>,
}

impl HuggingFaceClient {
    /// Create a new HuggingFace client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            ClaimCheckError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            api_key: api_key.into(),
            http,
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            false_labels: DEFAULT_FALSE_LABELS.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Use a different classification model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Replace the set of raw labels that mean "false".
    pub fn false_labels(mut self, labels: Vec<String>) -> Self {
        self.false_labels = labels;
        self
    }

    /// Classify a text with the configured model.
    ///
    /// The highest-scoring label wins; ties keep the first label returned.
    pub async fn classify(&self, text: &str) -> Result<Classification> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await?;

        self.handle_response_errors(&response)?;

        let body: ClassifyResponse = response.json().await?;
        let scores = body.into_scores();

        let top = scores
            .into_iter()
            .reduce(|best, next| if next.score > best.score { next } else { best })
            .ok_or(ClaimCheckError::EmptyResponse)?;

        debug!(model = %self.model, label = %top.label, score = top.score, "classified");

        Ok(Classification::from_raw(
            top.label,
            top.score,
            &self.false_labels,
            self.model.clone(),
        ))
    }

    /// Check response status and map to appropriate error.
    fn handle_response_errors(&self, response: &reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        match status.as_u16() {
            401 => Err(ClaimCheckError::AuthenticationFailed),
            404 => Err(ClaimCheckError::ModelNotFound(self.model.clone())),
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                Err(ClaimCheckError::RateLimited { retry_after })
            }
            503 => Err(ClaimCheckError::Api {
                status: 503,
                message: "Model is loading, please retry".to_string(),
            }),
            code => Err(ClaimCheckError::Api {
                status: code,
                message: format!("HuggingFace API error: {}", status),
            }),
        }
    }
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

/// Single inputs come back as `[[{label, score}, ...]]` from the hosted
/// pipeline and as `[{label, score}, ...]` from some deployments.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassifyResponse {
    fn into_scores(self) -> Vec<LabelScore> {
        match self {
            ClassifyResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            ClassifyResponse::Flat(scores) => scores,
        }
    }
}

// ============================================================================
// Provider Trait Implementation
// ============================================================================

#[async_trait]
impl ClassifyProvider for HuggingFaceClient {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        HuggingFaceClient::classify(self, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_response() {
        let json = r#"[[{"label": "True", "score": 0.91}, {"label": "False", "score": 0.09}]]"#;
        let parsed: ClassifyResponse = serde_json::from_str(json).unwrap();
        let scores = parsed.into_scores();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].label, "True");
    }

    #[test]
    fn parses_flat_response() {
        let json = r#"[{"label": "LABEL_0", "score": 0.7}]"#;
        let parsed: ClassifyResponse = serde_json::from_str(json).unwrap();
        let scores = parsed.into_scores();
        assert_eq!(scores.len(), 1);
        assert!((scores[0].score - 0.7).abs() < 1e-6);
    }

    #[test]
    fn builder_overrides_model() {
        let client = HuggingFaceClient::new("k").unwrap().model("org/other");
        assert_eq!(client.model, "org/other");
    }
}
