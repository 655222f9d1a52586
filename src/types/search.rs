//! Web search result types.

use serde::{Deserialize, Serialize};

/// A single page returned by the site-restricted search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Page title.
    pub title: String,
    /// Page URL.
    pub url: String,
    /// Text snippet summarising the page (may be empty).
    pub snippet: String,
}
