//! Warning sinks for template resolution
//!
//! Unknown tokens never fail a format call. They are reported through a
//! [`DiagnosticSink`], one message per occurrence.

use std::fmt;
use std::sync::Mutex;

/// The kind of template being resolved, used in warning messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    CommitMessage,
    OpenAuthoringMessage,
    Slug,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::CommitMessage => write!(f, "commit message"),
            TemplateKind::OpenAuthoringMessage => write!(f, "open authoring message"),
            TemplateKind::Slug => write!(f, "slug"),
        }
    }
}

/// Warning text for a token that could not be resolved
pub fn unknown_variable_message(name: &str, kind: TemplateKind) -> String {
    format!("Ignoring unknown variable \"{}\" in {} template.", name, kind)
}

/// Receives one message per unresolved token
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Sink that logs through `tracing` at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Sink that keeps every message, for callers that inspect warnings
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, in order
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, message: &str) {
        let mut messages = match self.messages.lock() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text() {
        assert_eq!(
            unknown_variable_message("unknown variable", TemplateKind::CommitMessage),
            "Ignoring unknown variable \"unknown variable\" in commit message template."
        );
        assert_eq!(
            unknown_variable_message("author-email", TemplateKind::OpenAuthoringMessage),
            "Ignoring unknown variable \"author-email\" in open authoring message template."
        );
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.warn("first");
        sink.warn("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }
}
