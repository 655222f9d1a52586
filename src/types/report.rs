//! The result of analysing one submission.

use serde::{Deserialize, Serialize};

use super::claim::FactCheckSummary;
use super::classification::Classification;
use super::lookup::Lookup;
use super::search::SearchItem;

/// Why no evidence lookup was attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The model predicted FALSE.
    FalseVerdict,
    /// The model predicted TRUE below the configured confidence threshold.
    LowConfidence { threshold: f32 },
}

/// Evidence gathered after classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    /// No lookup performed.
    Skipped { reason: SkipReason },
    /// A prior fact-check was found.
    FactCheck { summary: FactCheckSummary },
    /// No fact-check, but the news search returned pages.
    News {
        fact_check: Lookup<()>,
        items: Vec<SearchItem>,
    },
    /// Neither source produced anything.
    NothingFound {
        fact_check: Lookup<()>,
        web_search: Lookup<()>,
    },
}

/// Full outcome of one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub classification: Classification,
    pub evidence: Evidence,
    /// User-visible warnings raised while gathering evidence.
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl Report {
    /// Search results to display, if any.
    pub fn news_items(&self) -> &[SearchItem] {
        match &self.evidence {
            Evidence::News { items, .. } => items,
            _ => &[],
        }
    }

    /// The fact-check summary, if one was found.
    pub fn fact_check(&self) -> Option<&FactCheckSummary> {
        match &self.evidence {
            Evidence::FactCheck { summary } => Some(summary),
            _ => None,
        }
    }
}
