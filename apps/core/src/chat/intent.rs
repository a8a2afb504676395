//! Chat intent classification.
//!
//! An ordered rule list: each rule pairs an intent with its trigger, and the
//! first rule whose trigger matches the message wins. Rules are not mutually
//! exclusive ("explain this report" matches both explanation and summarize),
//! so the order is part of the behavior.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Greeting (hello, hi, good morning, etc.)
    Greeting,
    /// Which doctor should I see
    SpecialistReferral,
    /// Meaning of a medical term
    TermExplanation,
    /// Conditions mentioned in the report
    ConditionLookup,
    /// Summarize / analyze the report
    Summarize,
    /// Thanks
    Thanks,
    /// Nothing matched
    Help,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::SpecialistReferral => "specialist_referral",
            Intent::TermExplanation => "term_explanation",
            Intent::ConditionLookup => "condition_lookup",
            Intent::Summarize => "summarize",
            Intent::Thanks => "thanks",
            Intent::Help => "help",
        }
    }

    /// Intents that only exist when chat is aware of the report contents
    pub fn is_report_aware(&self) -> bool {
        matches!(
            self,
            Intent::SpecialistReferral | Intent::TermExplanation | Intent::ConditionLookup
        )
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// The trigger text that matched, `None` for the fallback
    pub matched_trigger: Option<String>,
}

/// How a rule recognizes a message
enum Trigger {
    /// Any phrase contained in the lower-cased message
    Substring(&'static [&'static str]),
    /// Regex match, for short words that would otherwise hit inside others
    Pattern(&'static LazyLock<Regex>),
}

impl Trigger {
    fn find(&self, lowered: &str) -> Option<String> {
        match self {
            Trigger::Substring(phrases) => phrases
                .iter()
                .find(|p| lowered.contains(*p))
                .map(|p| p.to_string()),
            Trigger::Pattern(regex) => regex.find(lowered).map(|m| m.as_str().to_string()),
        }
    }
}

struct IntentRule {
    intent: Intent,
    trigger: Trigger,
}

// "hi" would otherwise fire on "this", "which", "history"...
static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(hello|hi|hey|good morning|good afternoon|good evening)\b")
        .expect("Invalid regex: greetings")
});

const SPECIALIST_TRIGGERS: &[&str] = &["doctor", "specialist", "consult"];
const EXPLANATION_TRIGGERS: &[&str] = &["meaning", "explain"];
const CONDITION_TRIGGERS: &[&str] = &["issue", "problem", "condition"];
const SUMMARIZE_TRIGGERS: &[&str] = &["summar", "analy", "report"];
const THANKS_TRIGGERS: &[&str] = &["thank"];

/// Ordered, first-match-wins intent classifier
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl IntentClassifier {
    /// Build the rule list. Without `report_aware`, the specialist,
    /// explanation and condition rules are left out.
    pub fn new(report_aware: bool) -> Self {
        let rules = vec![
            IntentRule {
                intent: Intent::Greeting,
                trigger: Trigger::Pattern(&GREETING_PATTERN),
            },
            IntentRule {
                intent: Intent::SpecialistReferral,
                trigger: Trigger::Substring(SPECIALIST_TRIGGERS),
            },
            IntentRule {
                intent: Intent::TermExplanation,
                trigger: Trigger::Substring(EXPLANATION_TRIGGERS),
            },
            IntentRule {
                intent: Intent::ConditionLookup,
                trigger: Trigger::Substring(CONDITION_TRIGGERS),
            },
            IntentRule {
                intent: Intent::Summarize,
                trigger: Trigger::Substring(SUMMARIZE_TRIGGERS),
            },
            IntentRule {
                intent: Intent::Thanks,
                trigger: Trigger::Substring(THANKS_TRIGGERS),
            },
        ]
        .into_iter()
        .filter(|rule| report_aware || !rule.intent.is_report_aware())
        .collect();

        Self { rules }
    }

    /// Intents in evaluation order, excluding the `Help` fallback
    pub fn order(&self) -> Vec<Intent> {
        self.rules.iter().map(|r| r.intent).collect()
    }

    /// Classify a chat message
    pub fn classify(&self, message: &str) -> IntentResult {
        let lowered = message.trim().to_lowercase();

        for rule in &self.rules {
            if let Some(matched) = rule.trigger.find(&lowered) {
                return IntentResult {
                    intent: rule.intent,
                    matched_trigger: Some(matched),
                };
            }
        }

        IntentResult {
            intent: Intent::Help,
            matched_trigger: None,
        }
    }
}
