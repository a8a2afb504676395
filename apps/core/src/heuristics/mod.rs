//! # Heuristics Module
//!
//! Fixed-vocabulary text heuristics for medical reports. Everything here is
//! pure and total: no input makes these functions fail.
//!
//! ## Components
//! - `sentences`: sentence splitting
//! - `summarizer`: keyword-scored extractive summary
//! - `keywords`: pros/cons split and canned suggestions
//! - `specialist`: keyword to specialty mapping
//! - `conditions`: condition extraction and term glossary
//! - `analyzer`: runs the report heuristics together

pub mod analyzer;
pub mod conditions;
pub mod keywords;
pub mod sentences;
pub mod specialist;
pub mod summarizer;

pub use analyzer::{ReportAnalysis, ReportAnalyzer};
pub use conditions::{explain_term, extract_conditions};
pub use keywords::{pros_cons, suggestions, ProsCons};
pub use sentences::{split_sentences, SentenceSplitter, SplitMode};
pub use specialist::detect_specialist;
pub use summarizer::{summarize, EmptyReportBehavior, ReportSummarizer, ScoredSentence};
