//! Plain-text rendering for the terminal client.

use std::fmt::Write as _;

use super::{
    CHECKING, FALSE_VERDICT, LOW_CONFIDENCE, NO_FACT_CHECK, READ_FULL, RELEVANCE_CAVEAT,
    RenderOptions, confidence_percent, nothing_found, unavailable_note,
};
use crate::types::{Evidence, Report, SkipReason};

/// Render a report as plain text.
pub fn render_text(report: &Report, options: &RenderOptions) -> String {
    let mut out = String::new();
    let c = &report.classification;
    let _ = writeln!(out, "Prediction: {}", c.label.as_str().to_uppercase());
    let _ = writeln!(out, "Confidence: {}", confidence_percent(c));

    match &report.evidence {
        Evidence::Skipped {
            reason: SkipReason::FalseVerdict,
        } => {
            let _ = writeln!(out, "{FALSE_VERDICT}");
            return out;
        }
        Evidence::Skipped {
            reason: SkipReason::LowConfidence { threshold },
        } => {
            let _ = writeln!(out, "{LOW_CONFIDENCE} (threshold {threshold:.2})");
            return out;
        }
        _ => {
            let _ = writeln!(out, "{CHECKING}");
        }
    }

    if let Some(summary) = report.fact_check() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Claim: {}", summary.claim_text);
        let _ = writeln!(out, "Rating: {}", summary.rating);
        let _ = writeln!(out, "Publisher: {}", summary.publisher);
        let _ = writeln!(out, "{READ_FULL}: {}", summary.url);
        return out;
    }

    let _ = writeln!(out, "{NO_FACT_CHECK}");
    for warning in &report.warnings {
        let _ = writeln!(out, "warning: {warning}");
    }

    match &report.evidence {
        Evidence::News { items, .. } => {
            let _ = writeln!(out);
            let _ = writeln!(out, "Potential Matches from {}:", options.site_name);
            let _ = writeln!(out, "({RELEVANCE_CAVEAT})");
            for item in items {
                let _ = writeln!(out, "- {} <{}>", item.title, item.url);
                if !item.snippet.is_empty() {
                    let _ = writeln!(out, "  {}", item.snippet);
                }
            }
        }
        Evidence::NothingFound {
            fact_check,
            web_search,
        } => {
            let _ = writeln!(out, "{}", nothing_found(&options.site_name));
            if let Some(note) = unavailable_note(fact_check, web_search) {
                let _ = writeln!(out, "{note}");
            }
        }
        Evidence::Skipped { .. } | Evidence::FactCheck { .. } => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Classification, DEFAULT_FALSE_LABELS, Lookup, SearchItem};

    fn report(raw_label: &str, evidence: Evidence) -> Report {
        Report {
            classification: Classification::from_raw(raw_label, 0.8, DEFAULT_FALSE_LABELS, "m"),
            evidence,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn false_verdict_stops_after_message() {
        let text = render_text(
            &report(
                "False",
                Evidence::Skipped {
                    reason: SkipReason::FalseVerdict,
                },
            ),
            &RenderOptions::default(),
        );
        assert!(text.starts_with("Prediction: FALSE\nConfidence: 80.00%\n"));
        assert!(text.contains(FALSE_VERDICT));
        assert!(!text.contains(CHECKING));
    }

    #[test]
    fn news_items_are_listed() {
        let evidence = Evidence::News {
            fact_check: Lookup::NoMatches,
            items: vec![SearchItem {
                title: "Aliens? No.".to_string(),
                url: "https://www.bbc.com/news/1".to_string(),
                snippet: "Officials deny.".to_string(),
            }],
        };
        let text = render_text(&report("True", evidence), &RenderOptions::default());
        assert!(text.contains("Potential Matches from BBC News:"));
        assert!(text.contains("- Aliens? No. <https://www.bbc.com/news/1>"));
        assert!(text.contains("  Officials deny."));
    }
}
