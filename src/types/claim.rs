//! Fact-check claim types.

use serde::{Deserialize, Serialize};

/// A prior fact-check record: a statement, its rating, and who rated it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckClaim {
    /// The claim as worded by the fact-checker.
    pub claim_text: String,
    /// Who originally made the claim, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant: Option<String>,
    /// Reviews of the claim, in the order returned by the service.
    pub reviews: Vec<ClaimReview>,
}

/// One publisher's review of a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimReview {
    /// Textual rating, e.g. "False" or "Misleading".
    pub rating: String,
    /// Publisher name.
    pub publisher: String,
    /// Link to the full review.
    pub url: String,
    /// Review date as reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_date: Option<String>,
}

/// The fact-check shown to the user: the first claim's first review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckSummary {
    pub claim_text: String,
    pub rating: String,
    pub publisher: String,
    pub url: String,
}

impl FactCheckSummary {
    /// Summarise a claim list.
    ///
    /// Only the first claim is considered, since the service already ranks
    /// them. Returns `None` for an empty list or when the first claim
    /// carries no review.
    pub fn from_claims(claims: &[FactCheckClaim]) -> Option<Self> {
        let claim = claims.first()?;
        let review = claim.reviews.first()?;
        Some(Self {
            claim_text: claim.claim_text.clone(),
            rating: review.rating.clone(),
            publisher: review.publisher.clone(),
            url: review.url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(text: &str, reviews: Vec<ClaimReview>) -> FactCheckClaim {
        FactCheckClaim {
            claim_text: text.to_string(),
            claimant: None,
            reviews,
        }
    }

    fn review(rating: &str, publisher: &str) -> ClaimReview {
        ClaimReview {
            rating: rating.to_string(),
            publisher: publisher.to_string(),
            url: format!("https://{}.example/review", publisher.to_lowercase()),
            review_date: None,
        }
    }

    #[test]
    fn summary_uses_first_claim_and_first_review() {
        let claims = vec![
            claim("first", vec![review("False", "Reuters"), review("True", "AP")]),
            claim("second", vec![review("True", "AFP")]),
        ];
        let summary = FactCheckSummary::from_claims(&claims).unwrap();
        assert_eq!(summary.claim_text, "first");
        assert_eq!(summary.rating, "False");
        assert_eq!(summary.publisher, "Reuters");
        assert_eq!(summary.url, "https://reuters.example/review");
    }

    #[test]
    fn summary_none_for_empty_list() {
        assert!(FactCheckSummary::from_claims(&[]).is_none());
    }

    #[test]
    fn summary_none_when_first_claim_has_no_review() {
        // A later reviewed claim does not rescue the summary.
        let claims = vec![claim("bare", vec![]), claim("reviewed", vec![review("False", "AP")])];
        assert!(FactCheckSummary::from_claims(&claims).is_none());
    }
}
