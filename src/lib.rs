//! claimcheck - fake-news claim checker
//!
//! A submitted claim is classified true/false by a fine-tuned BERT model
//! served from the HuggingFace Inference API. TRUE verdicts are then looked
//! up in Google Fact Check, falling back to a site-restricted news search
//! when no prior fact-check exists.
//!
//! # Example
//!
//! ```rust,no_run
//! use claimcheck::{ClaimChecker, Evidence};
//!
//! #[tokio::main]
//! async fn main() -> claimcheck::Result<()> {
//!     let checker = ClaimChecker::builder()
//!         .huggingface("hf_your_key")
//!         .fact_check("google_key")
//!         .web_search("google_key", "your_cx")
//!         .build()?;
//!
//!     let report = checker.analyze("Government confirms aliens landed in 2025").await?;
//!     println!("{} ({:.2})", report.classification.label, report.classification.confidence);
//!
//!     if let Evidence::FactCheck { summary } = &report.evidence {
//!         println!("{} says: {}", summary.publisher, summary.rating);
//!     }
//!     Ok(())
//! }
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod providers;
pub mod render;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use checker::{ClaimChecker, ClaimCheckerBuilder};
pub use error::{ClaimCheckError, Result};
pub use render::RenderOptions;
pub use version::{PKG_VERSION, version_string};

pub use types::{
    ClaimReview, Classification, Evidence, FactCheckClaim, FactCheckSummary, Lookup, Report,
    SearchItem, SkipReason, Verdict,
};
