//! Presentation of reports: an HTML page for the web form and plain text
//! for the terminal. Both share the user-facing wording below.

mod html;
mod text;

pub use html::{PageState, render_page};
pub use text::render_text;

use crate::types::{Classification, Lookup};

pub(crate) const PROMPT: &str = "Enter some text and click Analyze.";
pub(crate) const FALSE_VERDICT: &str =
    "This statement is likely FALSE. No fact-check lookup performed.";
pub(crate) const LOW_CONFIDENCE: &str = "Model confidence below threshold. No lookup performed.";
pub(crate) const CHECKING: &str = "Model predicts TRUE. Checking trusted fact-check databases...";
pub(crate) const NO_FACT_CHECK: &str =
    "No verified sources found in Google Fact Check. Searching on well known news sites...";
pub(crate) const READ_FULL: &str = "Click here to read the full fact check";
pub(crate) const RELEVANCE_CAVEAT: &str = "Only first or second article will be relevant! \
     Results further below may divert from the original topic.";

/// Options that shape the rendered output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Display name of the searched site, e.g. "BBC News".
    pub site_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            site_name: "BBC News".to_string(),
        }
    }
}

pub(crate) fn confidence_percent(classification: &Classification) -> String {
    format!("{:.2}%", f64::from(classification.confidence) * 100.0)
}

pub(crate) fn nothing_found(site_name: &str) -> String {
    format!("No related articles found on {site_name}.")
}

/// Extra note when an empty result may be caused by a service failure.
pub(crate) fn unavailable_note(fact_check: &Lookup<()>, web_search: &Lookup<()>) -> Option<String> {
    let failed: Vec<&str> = [("fact check", fact_check), ("news search", web_search)]
        .into_iter()
        .filter(|(_, lookup)| lookup.is_unavailable())
        .map(|(name, _)| name)
        .collect();

    if failed.is_empty() {
        None
    } else {
        Some(format!(
            "The {} service could not be reached, so this result may be incomplete.",
            failed.join(" and ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_FALSE_LABELS;

    #[test]
    fn confidence_formats_two_decimals() {
        let c = Classification::from_raw("True", 0.9137, DEFAULT_FALSE_LABELS, "m");
        assert_eq!(confidence_percent(&c), "91.37%");
    }

    #[test]
    fn unavailable_note_only_when_a_service_failed() {
        assert!(unavailable_note(&Lookup::NoMatches, &Lookup::NoMatches).is_none());

        let down = Lookup::Unavailable {
            reason: "timeout".to_string(),
        };
        let note = unavailable_note(&Lookup::NoMatches, &down).unwrap();
        assert!(note.contains("news search"));
        assert!(!note.contains("fact check"));

        let note = unavailable_note(&down, &down).unwrap();
        assert!(note.contains("fact check and news search"));
    }
}
