//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus);
//! without one, every metric call is a no-op.
//!
//! All metrics are prefixed with `claimcheck_`. Counters end in `_total`,
//! histograms carry their unit in the name.
//!
//! # Common labels
//!
//! - `service`: external collaborator ("classifier", "fact_check", "web_search")
//! - `provider`: provider name (e.g. "huggingface", "google-fact-check")
//! - `status`: "ok" or "error"
//! - `source`: lookup stage ("fact_check" or "web_search")
//! - `outcome`: "found", "no_matches" or "unavailable"

/// Total calls made to external services.
///
/// Labels: `service`, `provider`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "claimcheck_requests_total";

/// External service call duration in seconds.
///
/// Labels: `service`.
pub const REQUEST_DURATION_SECONDS: &str = "claimcheck_request_duration_seconds";

/// Total classified submissions.
///
/// Labels: `verdict` ("true" | "false").
pub const VERDICTS_TOTAL: &str = "claimcheck_verdicts_total";

/// Total evidence lookups by outcome.
///
/// Labels: `source`, `outcome`.
pub const LOOKUPS_TOTAL: &str = "claimcheck_lookups_total";
