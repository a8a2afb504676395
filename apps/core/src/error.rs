use std::io;
use thiserror::Error;

/// Application-wide error type.
///
/// The heuristics themselves never fail: undecodable uploads, missing report
/// text and unknown glossary terms all degrade to textual fallbacks. What is
/// left here covers the host-facing edges (reading files, loading
/// configuration, serializing records).
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors (e.g. reading an uploaded file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g. out-of-range configuration values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g. unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
