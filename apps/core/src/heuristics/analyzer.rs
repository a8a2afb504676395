//! Report Analyzer - runs every report heuristic in one pass.
//!
//! This is what the "Summarize Report" action and the summarize chat intent
//! both produce.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::debug;

use super::keywords::{pros_cons, suggestions, ProsCons};
use super::summarizer::ReportSummarizer;
use crate::config::ReportConfig;

/// Summary, pros/cons and suggestions for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub summary: Vec<String>,
    pub pros: BTreeSet<String>,
    pub cons: BTreeSet<String>,
    pub suggestions: Vec<String>,
}

/// Orchestrates summarization and keyword classification
pub struct ReportAnalyzer {
    summarizer: ReportSummarizer,
    max_sentences: usize,
}

impl Default for ReportAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportAnalyzer {
    pub fn new() -> Self {
        Self::from_config(&ReportConfig::default())
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            summarizer: ReportSummarizer::with_config(config.split_mode, config.empty_report),
            max_sentences: config.max_sentences,
        }
    }

    pub fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    /// Analyze with the configured summary length
    pub fn analyze(&self, text: &str) -> ReportAnalysis {
        self.analyze_with_limit(text, self.max_sentences)
    }

    /// Analyze with an explicit summary length (e.g. a per-request slider value)
    pub fn analyze_with_limit(&self, text: &str, max_sentences: usize) -> ReportAnalysis {
        let start = Instant::now();

        let summary = self.summarizer.summarize(text, max_sentences);
        let ProsCons { pros, cons } = pros_cons(text);
        let suggestions = suggestions(text);

        debug!(
            chars = text.len(),
            summary_lines = summary.len(),
            pros = pros.len(),
            cons = cons.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Analyzed report"
        );

        ReportAnalysis {
            summary,
            pros,
            cons,
            suggestions,
        }
    }
}
