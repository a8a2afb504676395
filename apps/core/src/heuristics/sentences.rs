//! Sentence splitting.
//!
//! Reports are cut after sentence-final punctuation (`.`, `!`, `?`). The
//! punctuation stays with the sentence it ends.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the patterns are compile-time constants
static STRICT_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("Invalid regex: strict sentence boundary"));

static LENIENT_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s*").expect("Invalid regex: lenient sentence boundary"));

/// Sentence boundary rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Punctuation must be followed by whitespace ("3.5 cm" stays whole)
    Strict,
    /// Any punctuation ends a sentence
    Lenient,
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::Strict => write!(f, "strict"),
            SplitMode::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(SplitMode::Strict),
            "lenient" => Ok(SplitMode::Lenient),
            other => Err(format!("unknown split mode '{}'", other)),
        }
    }
}

/// Splits report text into trimmed, non-empty sentences.
pub struct SentenceSplitter {
    mode: SplitMode,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(SplitMode::Strict)
    }
}

impl SentenceSplitter {
    pub fn new(mode: SplitMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    /// Split `text` into sentences.
    ///
    /// Text without terminal punctuation comes back as a single sentence;
    /// blank text yields nothing.
    pub fn split(&self, text: &str) -> Vec<String> {
        let boundary: &Regex = match self.mode {
            SplitMode::Strict => &*STRICT_BOUNDARY,
            SplitMode::Lenient => &*LENIENT_BOUNDARY,
        };

        let text = text.trim();
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in boundary.find_iter(text) {
            // Boundary punctuation is one ASCII byte; keep it on the left piece.
            let end = m.start() + 1;
            push_trimmed(&mut sentences, &text[start..end]);
            start = m.end();
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

/// Split with the default (strict) rule.
pub fn split_sentences(text: &str) -> Vec<String> {
    SentenceSplitter::default().split(text)
}
