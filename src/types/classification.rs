//! Model verdict types.
//!
//! The classifier is a binary true/false model. Its raw label strings vary
//! by checkpoint (`"True"`, `"FALSE"`, `"LABEL_0"`, ...), so they are mapped
//! onto [`Verdict`] through a configurable set of labels meaning "false".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw labels that mean "false" when no mapping is configured.
pub const DEFAULT_FALSE_LABELS: &[&str] = &["false", "label_0"];

/// The model's binary prediction for a submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The statement is predicted to be true.
    True,
    /// The statement is predicted to be false.
    False,
}

impl Verdict {
    /// Map a raw model label onto a verdict.
    ///
    /// Comparison is case-insensitive. Any label outside `false_labels`
    /// counts as true.
    pub fn from_model_label<S: AsRef<str>>(raw: &str, false_labels: &[S]) -> Self {
        let raw = raw.trim();
        if false_labels
            .iter()
            .any(|l| l.as_ref().eq_ignore_ascii_case(raw))
        {
            Verdict::False
        } else {
            Verdict::True
        }
    }

    /// Lowercase label, as used in metrics and the JSON API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "true",
            Verdict::False => "false",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Mapped prediction.
    pub label: Verdict,
    /// Score of the predicted label (0.0 to 1.0).
    pub confidence: f32,
    /// Label string exactly as returned by the model.
    pub raw_label: String,
    /// Model that produced the prediction.
    pub model: String,
}

impl Classification {
    /// Build a classification from a raw label and score.
    ///
    /// The score is clamped into `[0, 1]`; a NaN score becomes 0.
    pub fn from_raw<S: AsRef<str>>(
        raw_label: impl Into<String>,
        score: f32,
        false_labels: &[S],
        model: impl Into<String>,
    ) -> Self {
        let raw_label = raw_label.into();
        let confidence = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 1.0)
        };
        Self {
            label: Verdict::from_model_label(&raw_label, false_labels),
            confidence,
            raw_label,
            model: model.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn false_label_is_case_insensitive() {
        assert_eq!(
            Verdict::from_model_label("FALSE", DEFAULT_FALSE_LABELS),
            Verdict::False
        );
        assert_eq!(
            Verdict::from_model_label("False", DEFAULT_FALSE_LABELS),
            Verdict::False
        );
        assert_eq!(
            Verdict::from_model_label("LABEL_0", DEFAULT_FALSE_LABELS),
            Verdict::False
        );
    }

    #[test]
    fn unknown_labels_count_as_true() {
        assert_eq!(
            Verdict::from_model_label("True", DEFAULT_FALSE_LABELS),
            Verdict::True
        );
        assert_eq!(
            Verdict::from_model_label("LABEL_1", DEFAULT_FALSE_LABELS),
            Verdict::True
        );
        assert_eq!(
            Verdict::from_model_label("mostly-true", DEFAULT_FALSE_LABELS),
            Verdict::True
        );
    }

    #[test]
    fn custom_false_labels() {
        let labels = vec!["fake".to_string()];
        assert_eq!(Verdict::from_model_label("FAKE", &labels), Verdict::False);
        assert_eq!(Verdict::from_model_label("false", &labels), Verdict::True);
    }

    #[test]
    fn confidence_is_clamped() {
        let c = Classification::from_raw("True", 1.7, DEFAULT_FALSE_LABELS, "m");
        assert_eq!(c.confidence, 1.0);
        let c = Classification::from_raw("True", f32::NAN, DEFAULT_FALSE_LABELS, "m");
        assert_eq!(c.confidence, 0.0);
    }

    #[test]
    fn verdict_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Verdict::False).unwrap(), "\"false\"");
        assert_eq!(Verdict::True.to_string(), "true");
    }
}
