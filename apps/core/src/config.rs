//! Runtime configuration for the summarizer core.
//!
//! Values come from `MEDREPORT_*` environment variables (optionally loaded
//! from a `.env` file) and are validated before use.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;
use validator::Validate;

use crate::error::AppError;
use crate::heuristics::{EmptyReportBehavior, SplitMode};
use crate::session::DEFAULT_DISPLAY_LIMIT;

pub const ENV_MAX_SENTENCES: &str = "MEDREPORT_MAX_SENTENCES";
pub const ENV_HISTORY_LIMIT: &str = "MEDREPORT_HISTORY_LIMIT";
pub const ENV_EMPTY_REPORT: &str = "MEDREPORT_EMPTY_REPORT";
pub const ENV_SPLIT_MODE: &str = "MEDREPORT_SPLIT_MODE";
pub const ENV_REPORT_AWARE: &str = "MEDREPORT_REPORT_AWARE";

/// Represents the tunable behavior of the summarizer and chat dispatcher.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate)]
pub struct ReportConfig {
    /// Number of sentences kept in a summary. Value between 1 and 10.
    #[validate(range(min = 1, max = 10))]
    pub max_sentences: usize,
    /// How many history records a display shows, newest first.
    #[validate(range(min = 1))]
    pub history_limit: usize,
    /// What summarizing an empty report yields.
    pub empty_report: EmptyReportBehavior,
    /// Sentence boundary rule.
    pub split_mode: SplitMode,
    /// Enables the specialist, explanation and condition chat intents.
    pub report_aware_chat: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_sentences: 3,
            history_limit: DEFAULT_DISPLAY_LIMIT,
            empty_report: EmptyReportBehavior::Placeholder,
            split_mode: SplitMode::Strict,
            report_aware_chat: true,
        }
    }
}

impl ReportConfig {
    /// Builds a configuration from the environment.
    ///
    /// Unset variables fall back to [`ReportConfig::default`]. A `.env` file in
    /// the working directory is honored but never overrides variables that are
    /// already set.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            max_sentences: env_or(ENV_MAX_SENTENCES, defaults.max_sentences)?,
            history_limit: env_or(ENV_HISTORY_LIMIT, defaults.history_limit)?,
            empty_report: env_or(ENV_EMPTY_REPORT, defaults.empty_report)?,
            split_mode: env_or(ENV_SPLIT_MODE, defaults.split_mode)?,
            report_aware_chat: env_or(ENV_REPORT_AWARE, defaults.report_aware_chat)?,
        };

        config.validate()?;
        debug!(?config, "Loaded report configuration");
        Ok(config)
    }

    /// This configuration with another summary length, checked against the
    /// same bounds as the loaded value.
    pub fn with_max_sentences(&self, max_sentences: usize) -> Result<Self, AppError> {
        let config = Self {
            max_sentences,
            ..self.clone()
        };
        config.validate()?;
        Ok(config)
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_sentences, 3);
        assert_eq!(config.history_limit, 20);
    }

    #[test]
    fn test_out_of_range_max_sentences() {
        let config = ReportConfig {
            max_sentences: 11,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ReportConfig {
            max_sentences: 0,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_max_sentences() {
        let config = ReportConfig::default();
        let narrowed = config.with_max_sentences(1).expect("1 is in range");
        assert_eq!(narrowed.max_sentences, 1);
        assert_eq!(narrowed.history_limit, config.history_limit);

        assert!(matches!(config.with_max_sentences(0), Err(AppError::Validation(_))));
        assert!(matches!(config.with_max_sentences(11), Err(AppError::Validation(_))));
    }
}
