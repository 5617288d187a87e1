//! Step text normalization.
//!
//! Literal step texts for one step definition usually differ only in the data they
//! carry (quoted strings, numbers). Collapsing those values into placeholder tokens
//! gives one template-like label per definition.
//!
//! The label only ever grows: a candidate shorter than the current label is assumed
//! to have lost information (for example a step with optional trailing clauses) and
//! is discarded. This is a heuristic; a legitimately shorter label is
//! indistinguishable from a truncated one.
use regex::{NoExpand, Regex};
use std::sync::OnceLock;

pub const DEFAULT_QUOTE_PLACEHOLDER: &str = "???";
pub const DEFAULT_NUMBER_PLACEHOLDER: &str = "#";

fn quoted_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""[^"]*""#).expect("quoted literal pattern is valid"))
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"))
}

/// Result of feeding one literal text into a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalization {
    /// The candidate replaces the current label.
    Accepted(String),
    /// The candidate was shorter than the current label and was dropped.
    Retained { candidate: String },
}

impl Normalization {
    /// Resolve the outcome into the label to keep.
    pub fn into_label(self, current: &str) -> String {
        match self {
            Normalization::Accepted(candidate) => candidate,
            Normalization::Retained { .. } => current.to_string(),
        }
    }

    pub fn is_anomaly(&self) -> bool {
        matches!(self, Normalization::Retained { .. })
    }
}

/// Collapses quoted literals and digit runs into placeholder tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    quote_placeholder: String,
    number_placeholder: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTE_PLACEHOLDER, DEFAULT_NUMBER_PLACEHOLDER)
    }
}

impl Normalizer {
    pub fn new(quote_placeholder: impl Into<String>, number_placeholder: impl Into<String>) -> Self {
        Self {
            quote_placeholder: quote_placeholder.into(),
            number_placeholder: number_placeholder.into(),
        }
    }

    /// Template form of a literal step text.
    ///
    /// Quoted literals are replaced before digit runs, so digits inside quotes are
    /// absorbed by the quote placeholder.
    pub fn candidate(&self, text: &str) -> String {
        let unquoted = quoted_pattern().replace_all(text, NoExpand(&self.quote_placeholder));
        number_pattern()
            .replace_all(&unquoted, NoExpand(&self.number_placeholder))
            .into_owned()
    }

    /// Compare the candidate for `new_text` against `current` without resolving.
    pub fn evaluate(&self, current: &str, new_text: &str) -> Normalization {
        let candidate = self.candidate(new_text);
        if utf16_len(&candidate) < utf16_len(current) {
            Normalization::Retained { candidate }
        } else {
            Normalization::Accepted(candidate)
        }
    }

    /// Label to keep after observing `new_text` for a step whose label is `current`.
    pub fn normalize(&self, current: &str, new_text: &str) -> String {
        let outcome = self.evaluate(current, new_text);
        if let Normalization::Retained { candidate } = &outcome {
            tracing::debug!(
                candidate = %candidate,
                current = %current,
                "normalized text is less descriptive than the current label; keeping current"
            );
        }
        outcome.into_label(current)
    }
}

/// Label length in UTF-16 code units, the unit labels are compared in.
fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// [`Normalizer::normalize`] with the default placeholder tokens.
pub fn normalize(current: &str, new_text: &str) -> String {
    Normalizer::default().normalize(current, new_text)
}
