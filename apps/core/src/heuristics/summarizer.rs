//! Extractive summarization by keyword scoring.
//!
//! Each sentence scores `2 × (distinct summary keywords it contains)` plus a
//! length bonus of `min(words, 40) / 40`. The best `max_sentences` sentences
//! are returned in score order; equal scores keep their original order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::keywords::SUMMARY_KEYWORDS;
use super::sentences::{SentenceSplitter, SplitMode};

/// Returned as the only summary line when there is nothing to summarize.
pub const EMPTY_REPORT_PLACEHOLDER: &str = "No report text provided.";

const KEYWORD_WEIGHT: f64 = 2.0;
const LENGTH_CAP_WORDS: usize = 40;

/// What an empty report summarizes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReportBehavior {
    /// A single [`EMPTY_REPORT_PLACEHOLDER`] line
    Placeholder,
    /// No lines at all
    Empty,
}

impl fmt::Display for EmptyReportBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReportBehavior::Placeholder => write!(f, "placeholder"),
            EmptyReportBehavior::Empty => write!(f, "empty"),
        }
    }
}

impl FromStr for EmptyReportBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "placeholder" => Ok(EmptyReportBehavior::Placeholder),
            "empty" => Ok(EmptyReportBehavior::Empty),
            other => Err(format!("unknown empty-report behavior '{}'", other)),
        }
    }
}

/// A sentence and its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub score: f64,
    pub sentence: String,
}

impl ScoredSentence {
    pub fn from_sentence(sentence: &str) -> Self {
        let low = sentence.to_lowercase();
        let keyword_hits = SUMMARY_KEYWORDS.iter().filter(|kw| low.contains(*kw)).count();
        let words = sentence.split_whitespace().count().min(LENGTH_CAP_WORDS);

        Self {
            score: KEYWORD_WEIGHT * keyword_hits as f64 + words as f64 / LENGTH_CAP_WORDS as f64,
            sentence: sentence.to_string(),
        }
    }
}

/// Keyword-scoring summarizer
pub struct ReportSummarizer {
    splitter: SentenceSplitter,
    empty_report: EmptyReportBehavior,
}

impl Default for ReportSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSummarizer {
    /// Strict splitting, placeholder on empty input
    pub fn new() -> Self {
        Self::with_config(SplitMode::Strict, EmptyReportBehavior::Placeholder)
    }

    pub fn with_config(split_mode: SplitMode, empty_report: EmptyReportBehavior) -> Self {
        Self {
            splitter: SentenceSplitter::new(split_mode),
            empty_report,
        }
    }

    /// Score every sentence of `text`, in original order
    pub fn score_sentences(&self, text: &str) -> Vec<ScoredSentence> {
        self.splitter
            .split(text)
            .iter()
            .map(|s| ScoredSentence::from_sentence(s))
            .collect()
    }

    /// Pick the top `max_sentences` sentences.
    ///
    /// `max_sentences` is not clamped here; configuration validates it.
    pub fn summarize(&self, text: &str, max_sentences: usize) -> Vec<String> {
        let mut scored = self.score_sentences(text);

        if scored.is_empty() {
            debug!(behavior = %self.empty_report, "Nothing to summarize");
            return match self.empty_report {
                EmptyReportBehavior::Placeholder => vec![EMPTY_REPORT_PLACEHOLDER.to_string()],
                EmptyReportBehavior::Empty => vec![],
            };
        }

        // sort_by is stable, so ties keep report order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            sentences = scored.len(),
            keep = max_sentences,
            top_score = scored[0].score,
            "Scored report sentences"
        );

        scored
            .into_iter()
            .take(max_sentences)
            .map(|s| s.sentence)
            .collect()
    }
}

/// Summarize with the default summarizer.
pub fn summarize(text: &str, max_sentences: usize) -> Vec<String> {
    ReportSummarizer::new().summarize(text, max_sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_formula() {
        // "mass" and "lesion" hit, plus 4 words
        let scored = ScoredSentence::from_sentence("Mass and lesion seen");
        assert!((scored.score - (4.0 + 4.0 / 40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_counted_once_per_sentence() {
        let once = ScoredSentence::from_sentence("tumor");
        let twice = ScoredSentence::from_sentence("tumor tumor");
        assert!((once.score - (2.0 + 1.0 / 40.0)).abs() < 1e-9);
        assert!((twice.score - (2.0 + 2.0 / 40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_length_bonus_capped() {
        let long = "word ".repeat(100);
        let scored = ScoredSentence::from_sentence(&long);
        assert!((scored.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_ranks_keyword_sentences_first() {
        let text = "The patient arrived on time. Impression: a small lesion is seen. Weather was nice.";
        let summary = summarize(text, 1);
        assert_eq!(summary, vec!["Impression: a small lesion is seen."]);
    }

    #[test]
    fn test_summarize_ties_keep_order() {
        let text = "One two. Three four. Five six.";
        let summary = summarize(text, 3);
        assert_eq!(summary, vec!["One two.", "Three four.", "Five six."]);
    }

    #[test]
    fn test_empty_report_behaviors() {
        assert_eq!(summarize("   ", 3), vec![EMPTY_REPORT_PLACEHOLDER.to_string()]);

        let summarizer = ReportSummarizer::with_config(SplitMode::Strict, EmptyReportBehavior::Empty);
        assert!(summarizer.summarize("", 3).is_empty());
    }

    #[test]
    fn test_zero_max_sentences() {
        assert!(summarize("Mass seen.", 0).is_empty());
    }
}
