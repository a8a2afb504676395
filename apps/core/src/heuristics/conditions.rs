//! Condition extraction and the medical term glossary.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Conditions recognized in reports
pub const CONDITION_VOCABULARY: &[&str] = &[
    "diabetes",
    "hypertension",
    "anemia",
    "asthma",
    "pneumonia",
    "arthritis",
    "cancer",
    "infection",
    "fracture",
    "tumor",
    "obesity",
    "migraine",
    "stroke",
];

/// Plain-language definitions, keyed by lower-case term
pub const GLOSSARY: &[(&str, &str)] = &[
    (
        "hypertension",
        "High blood pressure, a long-term force of blood against artery walls that is higher than normal.",
    ),
    (
        "anemia",
        "A shortage of healthy red blood cells or hemoglobin to carry oxygen through the body.",
    ),
    (
        "biopsy",
        "Removal of a small sample of tissue so it can be examined under a microscope.",
    ),
    (
        "lesion",
        "An area of abnormal tissue, such as a wound, sore, or growth.",
    ),
    (
        "benign",
        "Not cancerous; a benign growth does not spread to other parts of the body.",
    ),
    (
        "malignant",
        "Cancerous; a malignant growth can invade nearby tissue and spread.",
    ),
];

const MIN_CONDITION_WORD_LEN: usize = 4;

static CONDITION_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[A-Za-z]{{{},}}", MIN_CONDITION_WORD_LEN))
        .expect("Invalid regex: condition words")
});

static ALPHA_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("Invalid regex: alphabetic words"));

/// Vocabulary conditions mentioned in `text`
pub fn extract_conditions(text: &str) -> BTreeSet<String> {
    CONDITION_WORDS
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|word| CONDITION_VOCABULARY.contains(&word.as_str()))
        .collect()
}

/// Glossary definition for `term`, if there is one.
///
/// Lookup is exact apart from case and surrounding whitespace.
pub fn explain_term(term: &str) -> Option<&'static str> {
    let term = term.trim().to_lowercase();
    GLOSSARY
        .iter()
        .find(|(entry, _)| *entry == term)
        .map(|(_, definition)| *definition)
}

/// Lower-cased alphabetic tokens of `text`, in order
pub fn alphabetic_words(text: &str) -> Vec<String> {
    ALPHA_WORDS
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
