//! Keyword-based classifier stub.
//!
//! This is a deliberate simulation: the "prediction" is a case-insensitive
//! substring scan against two marker lists, standing in for the trained
//! model a real detector would call behind a backend service. The function
//! is total — every input string maps to exactly one verdict.

use std::fmt;

/// Marker phrases that flag a text as fabricated.
pub const DEFAULT_FAKE_MARKERS: &[&str] = &[
    "cure all diseases",
    "aliens spotted",
    "secret doctors",
    "lizard people",
    "time travel invented",
    "miracle diet pill",
    "shocking revelations",
];

/// Marker phrases that flag a text as legitimate reporting.
pub const DEFAULT_REAL_MARKERS: &[&str] = &[
    "scientists confirm",
    "new study shows",
    "government approves",
    "president signed",
    "company announces",
    "astronomers discover",
    "infrastructure bill",
];

/// Categorical result of a detection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A fake marker matched.
    FakeNews,
    /// A real marker matched (and no fake marker did).
    RealNews,
    /// The input was empty or whitespace-only.
    EmptyInput,
    /// No marker matched a non-empty input.
    Undetermined,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::FakeNews => write!(f, "Fake News"),
            Verdict::RealNews => write!(f, "Real News"),
            Verdict::EmptyInput => write!(f, "Empty input"),
            Verdict::Undetermined => write!(f, "Undetermined"),
        }
    }
}

/// Substring matcher over two marker lists.
///
/// The lists are data, not logic: callers may supply their own via
/// [`crate::KeywordConfig`], and the built-in lists are the `Default`.
/// Markers are normalized to lowercase once at construction so `classify`
/// only lowercases the input text.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    fake_markers: Vec<String>,
    real_markers: Vec<String>,
}

impl KeywordClassifier {
    pub fn new(fake_markers: Vec<String>, real_markers: Vec<String>) -> Self {
        Self {
            fake_markers: lowercase_all(fake_markers),
            real_markers: lowercase_all(real_markers),
        }
    }

    /// Classify a text. Pure, deterministic, case-insensitive.
    ///
    /// Fake markers are checked before real markers, so a text containing
    /// both categories reports `FakeNews`. The empty-input check runs
    /// after the marker scans; markers are non-blank, so no marker can
    /// match a whitespace-only text anyway.
    pub fn classify(&self, text: &str) -> Verdict {
        let lowered = text.to_lowercase();
        if self.fake_markers.iter().any(|m| lowered.contains(m.as_str())) {
            return Verdict::FakeNews;
        }
        if self.real_markers.iter().any(|m| lowered.contains(m.as_str())) {
            return Verdict::RealNews;
        }
        if text.trim().is_empty() {
            return Verdict::EmptyInput;
        }
        Verdict::Undetermined
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_FAKE_MARKERS.iter().map(ToString::to_string).collect(),
            DEFAULT_REAL_MARKERS.iter().map(ToString::to_string).collect(),
        )
    }
}

fn lowercase_all(markers: Vec<String>) -> Vec<String> {
    markers.into_iter().map(|m| m.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fake_marker_matches_any_case() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            Verdict::FakeNews,
            classifier.classify("BREAKING: Aliens Spotted over the capital")
        );
        assert_eq!(Verdict::FakeNews, classifier.classify("aliens spotted"));
        assert_eq!(Verdict::FakeNews, classifier.classify("ALIENS SPOTTED!!!"));
    }

    #[test]
    fn real_marker_matches_when_no_fake_marker() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            Verdict::RealNews,
            classifier.classify("A New Study Shows coffee is fine in moderation")
        );
    }

    #[test]
    fn fake_wins_over_real_when_both_match() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            Verdict::FakeNews,
            classifier.classify("New study shows lizard people run the senate")
        );
    }

    #[test]
    fn empty_and_whitespace_input() {
        let classifier = KeywordClassifier::default();
        assert_eq!(Verdict::EmptyInput, classifier.classify(""));
        assert_eq!(Verdict::EmptyInput, classifier.classify("   "));
        assert_eq!(Verdict::EmptyInput, classifier.classify("\n\t "));
    }

    #[test]
    fn unmatched_text_is_undetermined() {
        let classifier = KeywordClassifier::default();
        assert_eq!(
            Verdict::Undetermined,
            classifier.classify("The weather is nice today.")
        );
    }

    #[test]
    fn custom_markers_drive_classification() {
        let classifier = KeywordClassifier::new(
            vec!["Hoverboards Real".to_string()],
            vec!["council votes".to_string()],
        );
        assert_eq!(
            Verdict::FakeNews,
            classifier.classify("hoverboards real, says influencer")
        );
        assert_eq!(
            Verdict::RealNews,
            classifier.classify("City council votes on zoning")
        );
        // Built-in markers no longer apply once replaced.
        assert_eq!(
            Verdict::Undetermined,
            classifier.classify("aliens spotted")
        );
    }

    #[test]
    fn marker_inside_longer_word_still_matches() {
        // Substring semantics, not word-boundary semantics.
        let classifier = KeywordClassifier::default();
        assert_eq!(
            Verdict::RealNews,
            classifier.classify("xxinfrastructure billxx")
        );
    }
}
