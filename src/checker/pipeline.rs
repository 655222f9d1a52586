//! ClaimChecker - classify a claim, then gather evidence for TRUE verdicts

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument, warn};

use crate::providers::{ClassifyProvider, FactCheckProvider, WebSearchProvider};
use crate::telemetry;
use crate::types::{
    Classification, Evidence, FactCheckSummary, Lookup, Report, SearchItem, SkipReason, Verdict,
};
use crate::{ClaimCheckError, Result};

/// Runs one submission through classifier, fact check, and web search.
///
/// Steps run strictly in sequence. Only a classifier failure fails the
/// request; lookup failures degrade to [`Lookup::Unavailable`].
pub struct ClaimChecker {
    classifier: Arc<dyn ClassifyProvider>,
    fact_check: Arc<dyn FactCheckProvider>,
    web_search: Arc<dyn WebSearchProvider>,
    min_confidence: f32,
}

impl ClaimChecker {
    /// Create a checker from provider implementations.
    pub fn new(
        classifier: Arc<dyn ClassifyProvider>,
        fact_check: Arc<dyn FactCheckProvider>,
        web_search: Arc<dyn WebSearchProvider>,
    ) -> Self {
        Self {
            classifier,
            fact_check,
            web_search,
            min_confidence: 0.0,
        }
    }

    /// Skip lookups for TRUE predictions below this confidence.
    pub fn min_confidence(mut self, threshold: f32) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Domain the news search is restricted to.
    pub fn site(&self) -> &str {
        self.web_search.site()
    }

    /// Analyse one submitted claim.
    ///
    /// Returns [`ClaimCheckError::EmptyClaim`] without calling any service
    /// when the text is blank. Classifier errors are propagated as-is.
    #[instrument(skip(self, text), fields(operation = "analyze", chars = text.len()))]
    pub async fn analyze(&self, text: &str) -> Result<Report> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClaimCheckError::EmptyClaim);
        }

        let classification = self.classify(text).await?;
        info!(
            verdict = %classification.label,
            confidence = classification.confidence,
            "claim classified"
        );

        if let Some(reason) = self.skip_reason(&classification) {
            return Ok(Report {
                classification,
                evidence: Evidence::Skipped { reason },
                warnings: Vec::new(),
            });
        }

        let mut warnings = Vec::new();

        let fact_check = self.lookup_fact_check(text).await;
        let fact_check = match fact_check {
            Lookup::Found(summary) => {
                return Ok(Report {
                    classification,
                    evidence: Evidence::FactCheck { summary },
                    warnings,
                });
            }
            other => other.status(),
        };

        let evidence = match self.lookup_news(text, &mut warnings).await {
            Lookup::Found(items) => Evidence::News { fact_check, items },
            other => Evidence::NothingFound {
                fact_check,
                web_search: other.status(),
            },
        };

        Ok(Report {
            classification,
            evidence,
            warnings,
        })
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        let start = Instant::now();
        let result = self.classifier.classify(text).await;
        record_request("classifier", self.classifier.name(), start, result.is_ok());

        let classification = result?;
        metrics::counter!(telemetry::VERDICTS_TOTAL, "verdict" => classification.label.as_str())
            .increment(1);
        Ok(classification)
    }

    fn skip_reason(&self, classification: &Classification) -> Option<SkipReason> {
        match classification.label {
            Verdict::False => Some(SkipReason::FalseVerdict),
            Verdict::True if classification.confidence < self.min_confidence => {
                Some(SkipReason::LowConfidence {
                    threshold: self.min_confidence,
                })
            }
            Verdict::True => None,
        }
    }

    /// Any fact-check failure is treated like "no claims"; the reason is
    /// kept in the lookup but not raised as a warning.
    async fn lookup_fact_check(&self, text: &str) -> Lookup<FactCheckSummary> {
        let start = Instant::now();
        let result = self.fact_check.search_claims(text).await;
        record_request("fact_check", self.fact_check.name(), start, result.is_ok());

        let lookup = match result {
            Ok(claims) => match FactCheckSummary::from_claims(&claims) {
                Some(summary) => Lookup::Found(summary),
                None => Lookup::NoMatches,
            },
            Err(e) => {
                warn!(provider = self.fact_check.name(), error = %e, "fact check lookup failed");
                Lookup::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        record_lookup("fact_check", lookup.outcome());
        lookup
    }

    /// Failures without an HTTP status (connection, timeout, unreadable body)
    /// also produce a user-visible warning; status failures only mark the
    /// lookup unavailable.
    async fn lookup_news(&self, text: &str, warnings: &mut Vec<String>) -> Lookup<Vec<SearchItem>> {
        let start = Instant::now();
        let result = self.web_search.search(text).await;
        record_request("web_search", self.web_search.name(), start, result.is_ok());

        let lookup = match result {
            Ok(items) => Lookup::from_items(items),
            Err(e) => {
                warn!(
                    provider = self.web_search.name(),
                    transport = e.is_transport(),
                    error = %e,
                    "web search failed"
                );
                if e.status().is_none() {
                    warnings.push(format!("Error searching {}: {e}", self.web_search.site()));
                }
                Lookup::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        record_lookup("web_search", lookup.outcome());
        lookup
    }
}

/// Record service call outcome metrics (counter + histogram).
fn record_request(service: &'static str, provider: &str, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    let elapsed = start.elapsed().as_secs_f64();
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "service" => service,
        "provider" => provider.to_owned(),
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "service" => service,
    )
    .record(elapsed);
}

fn record_lookup(source: &'static str, outcome: &'static str) {
    metrics::counter!(telemetry::LOOKUPS_TOTAL,
        "source" => source,
        "outcome" => outcome,
    )
    .increment(1);
}
