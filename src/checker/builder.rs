//! Builder for configuring checker instances

use std::sync::Arc;
use std::time::Duration;

use super::ClaimChecker;
use crate::config::{Config, Secrets};
use crate::providers::{
    ClassifyProvider, CustomSearchClient, FactCheckClient, FactCheckProvider, HuggingFaceClient,
    WebSearchProvider, fact_check, huggingface, web_search,
};
use crate::{ClaimCheckError, Result};

/// Builder for configuring checker instances.
///
/// Each service is either configured from an API key (building the stock
/// HTTP client) or injected directly as a provider implementation.
pub struct ClaimCheckerBuilder {
    huggingface_key: Option<String>,
    huggingface_url: String,
    model: String,
    false_labels: Option<Vec<String>>,
    classifier_timeout: Duration,
    fact_check_key: Option<String>,
    fact_check_endpoint: String,
    language_code: String,
    fact_check_timeout: Duration,
    search_key: Option<String>,
    search_cx: String,
    search_endpoint: String,
    site: String,
    num_results: u8,
    search_timeout: Duration,
    min_confidence: f32,
    classifier: Option<Arc<dyn ClassifyProvider>>,
    fact_check: Option<Arc<dyn FactCheckProvider>>,
    web_search: Option<Arc<dyn WebSearchProvider>>,
}

impl Default for ClaimCheckerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimCheckerBuilder {
    pub fn new() -> Self {
        Self {
            huggingface_key: None,
            huggingface_url: huggingface::DEFAULT_BASE_URL.to_string(),
            model: huggingface::DEFAULT_MODEL.to_string(),
            false_labels: None,
            classifier_timeout: Duration::from_secs(huggingface::DEFAULT_TIMEOUT_SECS),
            fact_check_key: None,
            fact_check_endpoint: fact_check::DEFAULT_ENDPOINT.to_string(),
            language_code: fact_check::DEFAULT_LANGUAGE_CODE.to_string(),
            fact_check_timeout: Duration::from_secs(fact_check::DEFAULT_TIMEOUT_SECS),
            search_key: None,
            search_cx: web_search::DEFAULT_CX.to_string(),
            search_endpoint: web_search::DEFAULT_ENDPOINT.to_string(),
            site: web_search::DEFAULT_SITE.to_string(),
            num_results: web_search::DEFAULT_NUM_RESULTS,
            search_timeout: Duration::from_secs(web_search::DEFAULT_TIMEOUT_SECS),
            min_confidence: 0.0,
            classifier: None,
            fact_check: None,
            web_search: None,
        }
    }

    /// Populate a builder from loaded configuration and secrets.
    ///
    /// Services whose key is missing stay unconfigured; [`build`](Self::build)
    /// reports them.
    pub fn from_config(config: &Config, secrets: &Secrets) -> Self {
        let mut builder = Self::new()
            .huggingface_url(&config.classifier.base_url)
            .model(&config.classifier.model)
            .false_labels(config.classifier.false_labels.clone())
            .classifier_timeout(Duration::from_secs(config.classifier.timeout_secs))
            .min_confidence(config.classifier.min_confidence)
            .fact_check_endpoint(&config.fact_check.endpoint)
            .language_code(&config.fact_check.language_code)
            .fact_check_timeout(Duration::from_secs(config.fact_check.timeout_secs))
            .search_endpoint(&config.web_search.endpoint)
            .site(&config.web_search.site)
            .num_results(config.web_search.num)
            .search_timeout(Duration::from_secs(config.web_search.timeout_secs));

        if let Some(key) = secrets.api_key("huggingface") {
            builder = builder.huggingface(key);
        }
        if let Some(key) = secrets.api_key("fact_check") {
            builder = builder.fact_check(key);
        }
        if let Some(key) = secrets.api_key("web_search") {
            builder = builder.web_search(key, &config.web_search.cx);
        }
        builder
    }

    /// Configure the HuggingFace classifier.
    pub fn huggingface(mut self, api_key: impl Into<String>) -> Self {
        self.huggingface_key = Some(api_key.into());
        self
    }

    /// Override the HuggingFace inference base URL.
    pub fn huggingface_url(mut self, url: impl Into<String>) -> Self {
        self.huggingface_url = url.into();
        self
    }

    /// Set the classification model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the raw model labels that mean "false".
    pub fn false_labels(mut self, labels: Vec<String>) -> Self {
        self.false_labels = Some(labels);
        self
    }

    /// Set the classifier request timeout.
    pub fn classifier_timeout(mut self, timeout: Duration) -> Self {
        self.classifier_timeout = timeout;
        self
    }

    /// Skip lookups for TRUE predictions below this confidence.
    pub fn min_confidence(mut self, threshold: f32) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Configure the fact-check search API.
    pub fn fact_check(mut self, api_key: impl Into<String>) -> Self {
        self.fact_check_key = Some(api_key.into());
        self
    }

    /// Override the fact-check endpoint.
    pub fn fact_check_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.fact_check_endpoint = endpoint.into();
        self
    }

    /// Set the fact-check language filter.
    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = code.into();
        self
    }

    /// Set the fact-check request timeout.
    pub fn fact_check_timeout(mut self, timeout: Duration) -> Self {
        self.fact_check_timeout = timeout;
        self
    }

    /// Configure the custom search API with its key and engine ID.
    pub fn web_search(mut self, api_key: impl Into<String>, cx: impl Into<String>) -> Self {
        self.search_key = Some(api_key.into());
        self.search_cx = cx.into();
        self
    }

    /// Override the custom search endpoint.
    pub fn search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }

    /// Restrict the news search to a domain.
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Number of search results to request.
    pub fn num_results(mut self, num: u8) -> Self {
        self.num_results = num;
        self
    }

    /// Set the web search request timeout.
    pub fn search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Use a custom classifier instead of the HuggingFace client.
    pub fn classifier(mut self, provider: Arc<dyn ClassifyProvider>) -> Self {
        self.classifier = Some(provider);
        self
    }

    /// Use a custom fact-check provider.
    pub fn fact_check_provider(mut self, provider: Arc<dyn FactCheckProvider>) -> Self {
        self.fact_check = Some(provider);
        self
    }

    /// Use a custom web search provider.
    pub fn web_search_provider(mut self, provider: Arc<dyn WebSearchProvider>) -> Self {
        self.web_search = Some(provider);
        self
    }

    /// Build the checker.
    ///
    /// Fails with [`ClaimCheckError::NoProvider`] when a service has neither
    /// a key nor an injected provider.
    pub fn build(self) -> Result<ClaimChecker> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ClaimCheckError::Configuration(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }

        let classifier: Arc<dyn ClassifyProvider> = match (self.classifier, self.huggingface_key) {
            (Some(provider), _) => provider,
            (None, Some(key)) => {
                let mut client =
                    HuggingFaceClient::with_timeout(key, self.huggingface_url, self.classifier_timeout)?
                        .model(self.model);
                if let Some(labels) = self.false_labels {
                    client = client.false_labels(labels);
                }
                Arc::new(client)
            }
            (None, None) => return Err(ClaimCheckError::NoProvider("classifier")),
        };

        let fact_check: Arc<dyn FactCheckProvider> = match (self.fact_check, self.fact_check_key)
        {
            (Some(provider), _) => provider,
            (None, Some(key)) => Arc::new(
                FactCheckClient::with_timeout(key, self.fact_check_endpoint, self.fact_check_timeout)?
                    .language_code(self.language_code),
            ),
            (None, None) => return Err(ClaimCheckError::NoProvider("fact check")),
        };

        let web_search: Arc<dyn WebSearchProvider> = match (self.web_search, self.search_key) {
            (Some(provider), _) => provider,
            (None, Some(key)) => Arc::new(
                CustomSearchClient::with_timeout(
                    key,
                    self.search_cx,
                    self.search_endpoint,
                    self.search_timeout,
                )?
                .site(self.site)
                .num_results(self.num_results),
            ),
            (None, None) => return Err(ClaimCheckError::NoProvider("web search")),
        };

        Ok(ClaimChecker::new(classifier, fact_check, web_search).min_confidence(self.min_confidence))
    }
}
