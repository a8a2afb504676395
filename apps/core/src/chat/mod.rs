//! # Chat Module
//!
//! Keyword-triggered chat: an ordered intent rule list and the dispatcher
//! that answers each intent with a canned reply.

pub mod dispatcher;
pub mod intent;

pub use dispatcher::{ChatDispatcher, ChatReply, ReplyPayload};
pub use intent::{Intent, IntentClassifier, IntentResult};
