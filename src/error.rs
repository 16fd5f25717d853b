//! Error and diagnostic types

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::diagnostics::{unknown_variable_message, TemplateKind};
use crate::template::Span;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid slug sanitize_replacement {replacement:?}: it contains characters that are not allowed in a slug")]
    InvalidReplacement { replacement: String },
    #[error("collection not found: {name}")]
    UnknownCollection { name: String },
}

/// Returned when a string names no known commit action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown action '{name}' (expected one of: create, update, delete, uploadMedia, deleteMedia)")]
pub struct ParseActionError {
    pub name: String,
}

/// A `{{token}}` that no value provider could resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    pub name: String,
    /// Byte range of the whole placeholder, braces included
    pub span: Span,
}

impl UnknownToken {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// The one-line warning logged for this token
    pub fn message(&self, kind: TemplateKind) -> String {
        unknown_variable_message(&self.name, kind)
    }

    /// Format the warning with template context using ariadne
    pub fn format(&self, template: &str, kind: TemplateKind, filename: &str) -> String {
        // ariadne counts characters, spans count bytes
        let (before, token) = match (
            template.get(..self.span.start),
            template.get(self.span.clone()),
        ) {
            (Some(before), Some(token)) => (before, token),
            _ => return self.message(kind),
        };
        let start = before.chars().count();
        let end = start + token.chars().count();

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, start)
            .with_message(self.message(kind))
            .with_label(
                Label::new((filename, start..end))
                    .with_message(format!("no value for \"{}\"; it will be left empty", self.name))
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(template)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.message(kind),
        }
    }
}
