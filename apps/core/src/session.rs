//! Per-user session state.
//!
//! A [`SessionContext`] is created when a user starts interacting and dropped
//! when they leave. It holds the current report text and an append-only
//! history of interactions. Nothing in it is ever written to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

use crate::heuristics::{ReportAnalysis, ReportAnalyzer};
use crate::text_extract::resolve_report_text;

/// Number of records a history display shows by default.
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// One entry of the interaction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryRecord {
    /// Produced by the "Summarize Report" action.
    Summary(ReportAnalysis),
    /// A chat exchange. Summarize replies carry the analysis they produced.
    Reply {
        message: String,
        reply: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        analysis: Option<ReportAnalysis>,
    },
}

fn write_analysis(f: &mut fmt::Formatter<'_>, analysis: &ReportAnalysis) -> fmt::Result {
    for line in &analysis.summary {
        writeln!(f, "- {}", line)?;
    }
    if !analysis.pros.is_empty() {
        let pros: Vec<&str> = analysis.pros.iter().map(String::as_str).collect();
        writeln!(f, "Pros: {}", pros.join(", "))?;
    }
    if !analysis.cons.is_empty() {
        let cons: Vec<&str> = analysis.cons.iter().map(String::as_str).collect();
        writeln!(f, "Cons: {}", cons.join(", "))?;
    }
    writeln!(f, "Suggestions: {}", analysis.suggestions.join("; "))
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryRecord::Summary(analysis) => {
                writeln!(f, "Summary generated:")?;
                write_analysis(f, analysis)
            }
            HistoryRecord::Reply {
                message,
                reply,
                analysis,
            } => {
                writeln!(f, "User: {}", message)?;
                writeln!(f, "Bot: {}", reply)?;
                match analysis {
                    Some(analysis) => write_analysis(f, analysis),
                    None => Ok(()),
                }
            }
        }
    }
}

/// Append-only interaction log.
///
/// The log itself is unbounded; only reads through [`SessionHistory::recent`]
/// are windowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHistory {
    records: Vec<HistoryRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// The last `n` records, newest first.
    pub fn recent(&self, n: usize) -> Vec<&HistoryRecord> {
        self.records.iter().rev().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }
}

/// State owned by one user's session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    id: Uuid,
    created_at: DateTime<Utc>,
    report_text: String,
    history: SessionHistory,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            report_text: String::new(),
            history: SessionHistory::new(),
        };
        info!(session_id = %session.id, "Session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn report_text(&self) -> &str {
        &self.report_text
    }

    /// True when the report has non-whitespace content.
    pub fn has_report(&self) -> bool {
        !self.report_text.trim().is_empty()
    }

    /// Replace the report text (e.g. after the user edits it).
    pub fn set_report_text(&mut self, text: impl Into<String>) {
        self.report_text = text.into();
    }

    /// Set the report from an upload and/or pasted text.
    ///
    /// A decoded, non-empty upload wins; otherwise the pasted text is used.
    pub fn load_report(&mut self, upload: Option<&[u8]>, pasted: Option<&str>) -> &str {
        self.report_text = resolve_report_text(upload, pasted);
        info!(
            session_id = %self.id,
            chars = self.report_text.len(),
            "Report text loaded"
        );
        &self.report_text
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn record(&mut self, record: HistoryRecord) {
        self.history.append(record);
    }

    /// The last `n` records, newest first.
    pub fn recent(&self, n: usize) -> Vec<&HistoryRecord> {
        self.history.recent(n)
    }

    /// Analyze the current report and log the result as a summary record.
    pub fn summarize_report(&mut self, analyzer: &ReportAnalyzer) -> ReportAnalysis {
        self.summarize_report_with_limit(analyzer, analyzer.max_sentences())
    }

    /// Like [`SessionContext::summarize_report`], keeping at most
    /// `max_sentences` summary lines.
    pub fn summarize_report_with_limit(
        &mut self,
        analyzer: &ReportAnalyzer,
        max_sentences: usize,
    ) -> ReportAnalysis {
        let analysis = analyzer.analyze_with_limit(&self.report_text, max_sentences);
        self.record(HistoryRecord::Summary(analysis.clone()));
        info!(
            session_id = %self.id,
            summary_lines = analysis.summary.len(),
            history_len = self.history.len(),
            "Summary generated"
        );
        analysis
    }
}
