//! Medical report summarizer core.
//!
//! In-memory text heuristics for a report summarizer UI: extractive summary,
//! pros/cons keywords, canned suggestions and a keyword-triggered chat. The
//! rendering host owns the page; this crate owns the logic and the per-session
//! state it hands back.

pub mod chat;
pub mod config;
pub mod error;
pub mod heuristics;
pub mod session;
pub mod telemetry;
pub mod text_extract;

pub use chat::{ChatDispatcher, ChatReply, Intent, ReplyPayload};
pub use config::ReportConfig;
pub use error::AppError;
pub use heuristics::{ReportAnalysis, ReportAnalyzer};
pub use session::{HistoryRecord, SessionContext, SessionHistory, DEFAULT_DISPLAY_LIMIT};

#[cfg(test)]
mod tests;
