//! Keyword to specialty mapping.

use std::collections::BTreeSet;

pub const GENERAL_PHYSICIAN: &str = "General Physician";

/// Clinical keyword and the specialty it points to
pub const SPECIALIST_TABLE: &[(&str, &str)] = &[
    ("heart", "Cardiologist"),
    ("cardiac", "Cardiologist"),
    ("diabetes", "Endocrinologist"),
    ("thyroid", "Endocrinologist"),
    ("fracture", "Orthopedic Surgeon"),
    ("bone", "Orthopedic Surgeon"),
    ("arthritis", "Rheumatologist"),
    ("skin", "Dermatologist"),
    ("rash", "Dermatologist"),
    ("lung", "Pulmonologist"),
    ("asthma", "Pulmonologist"),
    ("kidney", "Nephrologist"),
    ("brain", "Neurologist"),
    ("seizure", "Neurologist"),
    ("tumor", "Oncologist"),
    ("cancer", "Oncologist"),
    ("pregnancy", "Gynecologist"),
    ("stomach", "Gastroenterologist"),
];

/// Specialties suggested by the report. Falls back to a general physician,
/// so the set is never empty.
pub fn detect_specialist(text: &str) -> BTreeSet<String> {
    let low = text.to_lowercase();
    let mut specialists: BTreeSet<String> = SPECIALIST_TABLE
        .iter()
        .filter(|(keyword, _)| low.contains(keyword))
        .map(|(_, specialty)| specialty.to_string())
        .collect();

    if specialists.is_empty() {
        specialists.insert(GENERAL_PHYSICIAN.to_string());
    }
    specialists
}
