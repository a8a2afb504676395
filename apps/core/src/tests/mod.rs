//! Test Module
//!
//! Cross-module test suite for the summarizer core.
//!
//! ## Test Categories
//! - `heuristics_tests`: sentence splitting, scoring and keyword classifier properties
//! - `dispatcher_tests`: chat intent routing and canned replies
//! - `session_tests`: history logging and the summarize action
//! - `text_extract_tests`: upload decoding and upload/paste precedence
//! - `config_tests`: environment-driven configuration

pub mod dispatcher_tests;
