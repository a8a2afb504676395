//! Chat Dispatcher - turns a chat message into a canned reply.
//!
//! Classification picks the intent; each intent has one handler. Handlers
//! that need the report fall back to asking for it when none is loaded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

use super::intent::{Intent, IntentClassifier};
use crate::config::ReportConfig;
use crate::heuristics::conditions::alphabetic_words;
use crate::heuristics::{
    detect_specialist, explain_term, extract_conditions, ReportAnalysis, ReportAnalyzer,
};
use crate::session::{HistoryRecord, SessionContext};

pub const GREETING_REPLY: &str =
    "Hello — I can summarize a medical report if you paste it and click \"Summarize Report\".";
pub const SUMMARY_REPLY: &str = "Report summary (generated in-memory):";
pub const NO_REPORT_REPLY: &str = "Please paste or upload the report text first.";
pub const THANKS_REPLY: &str = "You're welcome.";
pub const UNKNOWN_TERM_REPLY: &str = "Please specify which medical term you would like explained.";
pub const NO_CONDITIONS_REPLY: &str = "I couldn't detect any specific conditions in the report.";
pub const SIMPLE_HELP_REPLY: &str = "I can greet and summarize a pasted report. Try saying 'summarize' or paste a report and click Summarize Report.";
pub const REPORT_AWARE_HELP_REPLY: &str = "I can summarize a pasted report, suggest which specialist to consult, list conditions it mentions and explain medical terms. Try 'summarize', 'which doctor should I see?', 'any problems?' or 'explain anemia'.";

/// Structured data attached to a reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyPayload {
    None,
    Analysis(ReportAnalysis),
    Specialists { specialists: BTreeSet<String> },
    Conditions { conditions: BTreeSet<String> },
    Explanation { term: String, definition: String },
}

/// Reply to one chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub intent: Intent,
    pub reply: String,
    pub payload: ReplyPayload,
}

impl ChatReply {
    fn text(intent: Intent, reply: impl Into<String>) -> Self {
        Self {
            intent,
            reply: reply.into(),
            payload: ReplyPayload::None,
        }
    }

    /// The analysis attached to a summarize reply
    pub fn analysis(&self) -> Option<&ReportAnalysis> {
        match &self.payload {
            ReplyPayload::Analysis(analysis) => Some(analysis),
            _ => None,
        }
    }
}

/// Routes chat messages to handlers
pub struct ChatDispatcher {
    classifier: IntentClassifier,
    analyzer: ReportAnalyzer,
    report_aware: bool,
}

impl Default for ChatDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatDispatcher {
    pub fn new() -> Self {
        Self::from_config(&ReportConfig::default())
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            classifier: IntentClassifier::new(config.report_aware_chat),
            analyzer: ReportAnalyzer::from_config(config),
            report_aware: config.report_aware_chat,
        }
    }

    pub fn analyzer(&self) -> &ReportAnalyzer {
        &self.analyzer
    }

    /// Reply to `message` given the current report, if any.
    ///
    /// Pure: nothing is recorded. See [`ChatDispatcher::handle`].
    pub fn dispatch(&self, message: &str, report_text: Option<&str>) -> ChatReply {
        self.dispatch_with_limit(message, report_text, self.analyzer.max_sentences())
    }

    /// Like [`ChatDispatcher::dispatch`], with the summary length chosen for
    /// this request.
    pub fn dispatch_with_limit(
        &self,
        message: &str,
        report_text: Option<&str>,
        max_sentences: usize,
    ) -> ChatReply {
        let result = self.classifier.classify(message);
        debug!(
            intent = %result.intent,
            trigger = ?result.matched_trigger,
            "Classified chat message"
        );

        let report = report_text.filter(|text| !text.trim().is_empty());

        match result.intent {
            Intent::Greeting => ChatReply::text(Intent::Greeting, GREETING_REPLY),
            Intent::SpecialistReferral => match report {
                Some(text) => self.specialists(text),
                None => ChatReply::text(Intent::SpecialistReferral, NO_REPORT_REPLY),
            },
            Intent::TermExplanation => self.explanation(message),
            Intent::ConditionLookup => match report {
                Some(text) => self.conditions(text),
                None => ChatReply::text(Intent::ConditionLookup, NO_REPORT_REPLY),
            },
            Intent::Summarize => match report {
                Some(text) => ChatReply {
                    intent: Intent::Summarize,
                    reply: SUMMARY_REPLY.to_string(),
                    payload: ReplyPayload::Analysis(
                        self.analyzer.analyze_with_limit(text, max_sentences),
                    ),
                },
                None => ChatReply::text(Intent::Summarize, NO_REPORT_REPLY),
            },
            Intent::Thanks => ChatReply::text(Intent::Thanks, THANKS_REPLY),
            Intent::Help => ChatReply::text(Intent::Help, self.help_text()),
        }
    }

    /// Reply to `message` and log the exchange in the session history.
    pub fn handle(&self, session: &mut SessionContext, message: &str) -> ChatReply {
        self.handle_with_limit(session, message, self.analyzer.max_sentences())
    }

    /// Like [`ChatDispatcher::handle`], with the summary length chosen for
    /// this request.
    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    pub fn handle_with_limit(
        &self,
        session: &mut SessionContext,
        message: &str,
        max_sentences: usize,
    ) -> ChatReply {
        let message = message.trim();
        let reply = self.dispatch_with_limit(message, Some(session.report_text()), max_sentences);

        session.record(HistoryRecord::Reply {
            message: message.to_string(),
            reply: reply.reply.clone(),
            analysis: reply.analysis().cloned(),
        });
        info!(intent = %reply.intent, "Chat message handled");

        reply
    }

    fn specialists(&self, report: &str) -> ChatReply {
        let specialists = detect_specialist(report);
        ChatReply {
            intent: Intent::SpecialistReferral,
            reply: format!(
                "Based on the report, you may want to consult: {}.",
                join(&specialists)
            ),
            payload: ReplyPayload::Specialists { specialists },
        }
    }

    fn explanation(&self, message: &str) -> ChatReply {
        let found = alphabetic_words(message)
            .into_iter()
            .find_map(|word| explain_term(&word).map(|definition| (word, definition)));

        match found {
            Some((term, definition)) => ChatReply {
                intent: Intent::TermExplanation,
                reply: format!("{}: {}", capitalize(&term), definition),
                payload: ReplyPayload::Explanation {
                    term,
                    definition: definition.to_string(),
                },
            },
            None => ChatReply::text(Intent::TermExplanation, UNKNOWN_TERM_REPLY),
        }
    }

    fn conditions(&self, report: &str) -> ChatReply {
        let conditions = extract_conditions(report);
        if conditions.is_empty() {
            return ChatReply::text(Intent::ConditionLookup, NO_CONDITIONS_REPLY);
        }
        ChatReply {
            intent: Intent::ConditionLookup,
            reply: format!("Conditions mentioned in the report: {}.", join(&conditions)),
            payload: ReplyPayload::Conditions { conditions },
        }
    }

    fn help_text(&self) -> &'static str {
        if self.report_aware {
            REPORT_AWARE_HELP_REPLY
        } else {
            SIMPLE_HELP_REPLY
        }
    }
}

fn join(items: &BTreeSet<String>) -> String {
    items.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
