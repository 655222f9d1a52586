//! Lookup outcome type shared by the fact-check and web search stages.

use serde::{Deserialize, Serialize};

/// Outcome of querying one evidence source.
///
/// Keeps "the service failed" apart from "the service had nothing", so
/// the page can say which one happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Lookup<T> {
    /// The service answered with usable data.
    Found(T),
    /// The service answered, but had nothing relevant.
    NoMatches,
    /// The service could not be queried or returned an error.
    Unavailable { reason: String },
}

impl<T> Lookup<T> {
    /// Whether the service failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Lookup::Unavailable { .. })
    }

    /// Metric label for this outcome.
    pub fn outcome(&self) -> &'static str {
        match self {
            Lookup::Found(_) => "found",
            Lookup::NoMatches => "no_matches",
            Lookup::Unavailable { .. } => "unavailable",
        }
    }

    /// Drop the payload, keeping only the outcome.
    pub fn status(&self) -> Lookup<()> {
        match self {
            Lookup::Found(_) => Lookup::Found(()),
            Lookup::NoMatches => Lookup::NoMatches,
            Lookup::Unavailable { reason } => Lookup::Unavailable {
                reason: reason.clone(),
            },
        }
    }
}

impl<T> Lookup<Vec<T>> {
    /// `Found` for a non-empty list, `NoMatches` otherwise.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Lookup::NoMatches
        } else {
            Lookup::Found(items)
        }
    }
}
