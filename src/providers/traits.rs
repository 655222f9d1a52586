//! Provider traits, one per external collaborator.
//!
//! The pipeline only talks to these traits, so tests (and alternative
//! backends) can substitute in-process implementations for the HTTP
//! clients.
//!
//! Providers report failures as errors. Deciding whether a failure is
//! fatal (classification) or degrades to an empty lookup (fact check,
//! web search) is the pipeline's job, not the provider's.

use async_trait::async_trait;

use crate::Result;
use crate::types::{Classification, FactCheckClaim, SearchItem};

// ============================================================================
// Classifier
// ============================================================================

/// Provider for binary true/false text classification.
#[async_trait]
pub trait ClassifyProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Classify a non-empty text.
    async fn classify(&self, text: &str) -> Result<Classification>;
}

// ============================================================================
// Fact check
// ============================================================================

/// Provider for prior fact-check claims.
#[async_trait]
pub trait FactCheckProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Search for fact-checks matching the query, in service order.
    async fn search_claims(&self, query: &str) -> Result<Vec<FactCheckClaim>>;
}

// ============================================================================
// Web search
// ============================================================================

/// Provider for site-restricted web search.
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Domain the search is restricted to.
    fn site(&self) -> &str;

    /// Search pages on [`site`](Self::site), in service order.
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>>;
}
