//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays free for host output. The level comes
//! from `RUST_LOG` (default `info`); `MEDREPORT_LOG_FORMAT=json` switches to
//! bunyan-style JSON lines.

use std::env;
use std::str::FromStr;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::error::AppError;

pub const ENV_LOG_FORMAT: &str = "MEDREPORT_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("unknown log format '{}'", other))),
        }
    }
}

impl LogFormat {
    /// Reads [`ENV_LOG_FORMAT`], defaulting to pretty output
    pub fn from_env() -> Result<Self, AppError> {
        match env::var(ENV_LOG_FORMAT) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(LogFormat::default()),
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(app_name: &str, format: LogFormat) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Pretty => Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(app_name.to_string(), std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| AppError::Internal(format!("Failed to install tracing subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().ok(), Some(LogFormat::Json));
        assert_eq!("text".parse::<LogFormat>().ok(), Some(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_format_from_env() {
        temp_env::with_var(ENV_LOG_FORMAT, Some("bunyan"), || {
            assert_eq!(LogFormat::from_env().ok(), Some(LogFormat::Json));
        });
        temp_env::with_var_unset(ENV_LOG_FORMAT, || {
            assert_eq!(LogFormat::from_env().ok(), Some(LogFormat::Pretty));
        });
    }
}
