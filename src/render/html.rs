//! Single-page HTML rendering for the web form.

use std::fmt::Write as _;

use super::{
    CHECKING, FALSE_VERDICT, LOW_CONFIDENCE, NO_FACT_CHECK, PROMPT, READ_FULL, RELEVANCE_CAVEAT,
    RenderOptions, confidence_percent, nothing_found, unavailable_note,
};
use crate::types::{Evidence, Report, SkipReason};

/// What to show below the form.
#[derive(Debug, Clone, Copy)]
pub enum PageState<'a> {
    /// Fresh page or blank submission: show the prompt.
    Prompt,
    /// A completed analysis.
    Report(&'a Report),
    /// The request failed (classifier error).
    Error(&'a str),
}

const STYLE: &str = "\
body{font-family:sans-serif;max-width:760px;margin:2rem auto;padding:0 1rem;color:#222}\
textarea{width:100%;font:inherit}\
.caption{color:#666;font-size:.9rem}\
.box{padding:.75rem 1rem;border-radius:.4rem;margin:.75rem 0;white-space:pre-line}\
.info{background:#e8f0fe}.success{background:#e6f4ea}.warning{background:#fef7e0}.error{background:#fce8e6}\
progress{width:100%}iframe{border:1px solid #ddd;margin-bottom:1rem}";

/// Render the full page.
///
/// `claim` is echoed back into the textarea.
pub fn render_page(claim: &str, state: PageState<'_>, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Fake News Detector</title>\n");
    let _ = writeln!(out, "<style>{STYLE}</style>\n</head>\n<body>");
    out.push_str("<h1>\u{1F4F0} Fake News Detector</h1>\n");
    out.push_str(
        "<p class=\"caption\">A fine-tuned BERT verdict, checked against Google Fact Check \
         and a news search.</p>\n",
    );

    out.push_str("<form method=\"post\" action=\"/\">\n");
    out.push_str(
        "<label for=\"claim\">Paste a claim, headline, or short article snippet:</label>\n",
    );
    let _ = writeln!(
        out,
        "<textarea id=\"claim\" name=\"claim\" rows=\"6\" \
         placeholder=\"e.g., 'Government confirms aliens landed in 2025...'\" \
         title=\"Shorter claims work best on LIAR-style data.\">{}</textarea>",
        html_escape(claim)
    );
    out.push_str("<p><button type=\"submit\">Analyze</button></p>\n</form>\n");

    match state {
        PageState::Prompt => {
            let _ = writeln!(out, "<p>{}</p>", html_escape(PROMPT));
        }
        PageState::Error(message) => push_box(&mut out, "error", message),
        PageState::Report(report) => render_report(&mut out, report, options),
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_report(out: &mut String, report: &Report, options: &RenderOptions) {
    let c = &report.classification;
    let label = c.label.as_str().to_uppercase();
    let _ = writeln!(out, "<h3>Prediction: <strong>{label}</strong></h3>");
    let _ = writeln!(
        out,
        "<progress value=\"{:.4}\" max=\"1\"></progress>",
        c.confidence
    );
    let _ = writeln!(out, "<p>Confidence: {}</p>", confidence_percent(c));

    match &report.evidence {
        Evidence::Skipped { reason } => match reason {
            SkipReason::FalseVerdict => push_box(out, "error", FALSE_VERDICT),
            SkipReason::LowConfidence { .. } => push_box(out, "warning", LOW_CONFIDENCE),
        },
        evidence => {
            push_box(out, "info", CHECKING);
            render_evidence(out, evidence, &report.warnings, options);
        }
    }
}

fn render_evidence(
    out: &mut String,
    evidence: &Evidence,
    warnings: &[String],
    options: &RenderOptions,
) {
    if let Evidence::FactCheck { summary } = evidence {
        let body = format!(
            "Claim: {}\nRating: {}\nPublisher: {}",
            summary.claim_text, summary.rating, summary.publisher
        );
        push_box(out, "success", &body);
        let _ = writeln!(
            out,
            "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{READ_FULL}</a></p>",
            html_escape(safe_url(&summary.url))
        );
        return;
    }

    push_box(out, "warning", NO_FACT_CHECK);
    for warning in warnings {
        push_box(out, "error", warning);
    }

    match evidence {
        Evidence::News { items, .. } => {
            let _ = writeln!(
                out,
                "<h4>\u{1F50E} Potential Matches from {}:</h4>",
                html_escape(&options.site_name)
            );
            push_box(out, "warning", RELEVANCE_CAVEAT);
            out.push_str("<ul class=\"results\">\n");
            for item in items {
                let url = html_escape(safe_url(&item.url));
                let _ = writeln!(
                    out,
                    "<li><a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{}</a>\
                     <p class=\"caption\">{}</p>\
                     <iframe src=\"{url}\" width=\"700\" height=\"400\"></iframe></li>",
                    html_escape(&item.title),
                    html_escape(&item.snippet),
                );
            }
            out.push_str("</ul>\n");
        }
        Evidence::NothingFound {
            fact_check,
            web_search,
        } => {
            push_box(out, "error", &nothing_found(&options.site_name));
            if let Some(note) = unavailable_note(fact_check, web_search) {
                let _ = writeln!(out, "<p class=\"caption\">{}</p>", html_escape(&note));
            }
        }
        Evidence::Skipped { .. } | Evidence::FactCheck { .. } => {}
    }
}

fn push_box(out: &mut String, kind: &str, message: &str) {
    let _ = writeln!(
        out,
        "<div class=\"box {kind}\">{}</div>",
        html_escape(message)
    );
}

/// Only http(s) links are emitted; anything else becomes `#`.
fn safe_url(url: &str) -> &str {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        url
    } else {
        "#"
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Classification, DEFAULT_FALSE_LABELS, FactCheckSummary, Lookup, SearchItem,
    };

    #[test]
    fn html_escape_special_chars() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quote\""), "&quot;quote&quot;");
    }

    #[test]
    fn safe_url_rejects_script_scheme() {
        assert_eq!(safe_url("javascript:alert(1)"), "#");
        assert_eq!(safe_url("#"), "#");
        assert_eq!(safe_url("https://www.bbc.com/news"), "https://www.bbc.com/news");
    }

    #[test]
    fn prompt_page_has_form_and_prompt() {
        let page = render_page("", PageState::Prompt, &RenderOptions::default());
        assert!(page.contains("<form method=\"post\""));
        assert!(page.contains("name=\"claim\""));
        assert!(page.contains(PROMPT));
    }

    #[test]
    fn claim_is_echoed_escaped() {
        let page = render_page("<b>aliens</b>", PageState::Prompt, &RenderOptions::default());
        assert!(page.contains("&lt;b&gt;aliens&lt;/b&gt;</textarea>"));
    }

    fn report(evidence: Evidence, warnings: Vec<String>) -> Report {
        Report {
            classification: Classification::from_raw("True", 0.8, DEFAULT_FALSE_LABELS, "m"),
            evidence,
            warnings,
        }
    }

    fn render(report: &Report) -> String {
        render_page("claim", PageState::Report(report), &RenderOptions::default())
    }

    #[test]
    fn fact_check_summary_links_review() {
        let report = report(
            Evidence::FactCheck {
                summary: FactCheckSummary {
                    claim_text: "Aliens landed".to_string(),
                    rating: "False".to_string(),
                    publisher: "Reuters".to_string(),
                    url: "https://www.reuters.com/fact-check/aliens".to_string(),
                },
            },
            vec![],
        );
        let page = render(&report);
        assert!(page.contains("Rating: False"));
        assert!(page.contains("Publisher: Reuters"));
        assert!(page.contains("<a href=\"https://www.reuters.com/fact-check/aliens\""));
        assert!(!page.contains(NO_FACT_CHECK));
    }

    #[test]
    fn each_news_item_gets_a_frame() {
        let items = vec![
            SearchItem {
                title: "Rates rise".to_string(),
                url: "https://www.bbc.com/news/1".to_string(),
                snippet: "The bank raised rates.".to_string(),
            },
            SearchItem {
                title: "Markets react".to_string(),
                url: "https://www.bbc.com/news/2".to_string(),
                snippet: "Shares fell.".to_string(),
            },
        ];
        let report = report(
            Evidence::News {
                fact_check: Lookup::NoMatches,
                items,
            },
            vec![],
        );
        let page = render(&report);
        assert_eq!(page.matches("<iframe").count(), 2);
        assert!(page.contains(
            "<iframe src=\"https://www.bbc.com/news/1\" width=\"700\" height=\"400\"></iframe>"
        ));
        assert!(page.contains(">Markets react</a>"));
        assert!(page.contains("Shares fell."));
        assert!(page.contains("<progress value=\"0.8000\" max=\"1\"></progress>"));
        assert!(page.contains("Confidence: 80.00%"));
    }

    #[test]
    fn nothing_found_notes_unavailable_service() {
        let report = report(
            Evidence::NothingFound {
                fact_check: Lookup::NoMatches,
                web_search: Lookup::Unavailable {
                    reason: "timed out".to_string(),
                },
            },
            vec!["Error searching bbc.com: timed out".to_string()],
        );
        let page = render(&report);
        assert!(page.contains("No related articles found on BBC News."));
        assert!(page.contains("Error searching bbc.com: timed out"));
        assert!(page.contains("news search service could not be reached"));
        assert!(!page.contains("<iframe"));
    }

    #[test]
    fn nothing_found_without_failure_has_no_note() {
        let report = report(
            Evidence::NothingFound {
                fact_check: Lookup::NoMatches,
                web_search: Lookup::NoMatches,
            },
            vec![],
        );
        let page = render(&report);
        assert!(page.contains("No related articles found on BBC News."));
        assert!(!page.contains("could not be reached"));
    }
}
