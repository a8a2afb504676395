//! Fixed keyword vocabularies and the classifiers built on them.
//!
//! Every match here is a case-insensitive substring test against the whole
//! report, not tokenized word matching.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Keywords that make a sentence worth keeping in a summary
pub const SUMMARY_KEYWORDS: &[&str] = &[
    "diagnosis",
    "impression",
    "finding",
    "recommend",
    "recommendation",
    "normal",
    "abnormal",
    "mass",
    "lesion",
    "tumor",
    "fracture",
    "inflammation",
    "infection",
    "elevated",
    "decreased",
    "reduced",
    "stable",
];

/// Reassuring phrases
pub const POSITIVE_PHRASES: &[&str] = &[
    "normal",
    "unremarkable",
    "within normal limits",
    "no acute",
    "stable",
];

/// Concerning phrases
pub const NEGATIVE_PHRASES: &[&str] = &[
    "abnormal",
    "mass",
    "lesion",
    "tumor",
    "fracture",
    "infection",
    "inflammation",
    "elevated",
    "decreased",
    "reduced",
];

const FOLLOW_UP_TRIGGERS: &[&str] = &["follow-up", "recommend", "recommendation", "repeat"];
const REFERRAL_TRIGGERS: &[&str] = &["biopsy", "suspicious", "tumor", "mass", "lesion"];

pub const FOLLOW_UP_SUGGESTION: &str = "Follow-up recommended (see report recommendations).";
pub const REFERRAL_SUGGESTION: &str = "Consider specialist referral and possible biopsy/imaging.";
pub const FALLBACK_SUGGESTION: &str = "If unclear, consult your clinician for next steps.";

/// Matched positive and negative phrases, deduplicated and sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsCons {
    pub pros: BTreeSet<String>,
    pub cons: BTreeSet<String>,
}

/// Phrases from `vocabulary` contained in the already lower-cased `haystack`
pub(crate) fn matched_phrases(haystack: &str, vocabulary: &[&str]) -> BTreeSet<String> {
    vocabulary
        .iter()
        .filter(|phrase| haystack.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect()
}

/// Split a report into reassuring and concerning phrases.
///
/// "normal" is also found inside "abnormal", so a report mentioning only an
/// abnormal finding lists "normal" among its pros as well.
pub fn pros_cons(text: &str) -> ProsCons {
    let low = text.to_lowercase();
    ProsCons {
        pros: matched_phrases(&low, POSITIVE_PHRASES),
        cons: matched_phrases(&low, NEGATIVE_PHRASES),
    }
}

/// Canned next-step advice. Never empty.
pub fn suggestions(text: &str) -> Vec<String> {
    let low = text.to_lowercase();
    let mut advice = Vec::new();

    if FOLLOW_UP_TRIGGERS.iter().any(|t| low.contains(t)) {
        advice.push(FOLLOW_UP_SUGGESTION.to_string());
    }
    if REFERRAL_TRIGGERS.iter().any(|t| low.contains(t)) {
        advice.push(REFERRAL_SUGGESTION.to_string());
    }
    if advice.is_empty() {
        advice.push(FALLBACK_SUGGESTION.to_string());
    }

    advice
}
