//! Commit message assembly for entry and media actions

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::{CollectionConfig, CommitMessages, Config, DEFAULT_COLLECTION_LABEL};
use crate::diagnostics::{DiagnosticSink, TemplateKind, TracingSink};
use crate::error::ParseActionError;
use crate::slug::decode_slug;
use crate::template::{resolve_with_sink, TokenContext};

/// Wrapper used in open authoring mode when none is configured
pub const DEFAULT_OPEN_AUTHORING_TEMPLATE: &str = "{{message}}";

/// A change that gets committed to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Create,
    Update,
    Delete,
    UploadMedia,
    DeleteMedia,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::UploadMedia,
        Action::DeleteMedia,
    ];

    /// Config key for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::UploadMedia => "uploadMedia",
            Action::DeleteMedia => "deleteMedia",
        }
    }

    /// Built-in message template
    pub fn default_template(&self) -> &'static str {
        match self {
            Action::Create => r#"Create {{collection}} "{{slug}}""#,
            Action::Update => r#"Update {{collection}} "{{slug}}""#,
            Action::Delete => r#"Delete {{collection}} "{{slug}}""#,
            Action::UploadMedia => r#"Upload "{{path}}""#,
            Action::DeleteMedia => r#"Delete "{{path}}""#,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseActionError {
                name: s.to_string(),
            })
    }
}

/// What a commit is about
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitPayload<'a> {
    pub slug: &'a str,
    pub path: &'a str,
    pub collection: Option<&'a CollectionConfig>,
    pub author_login: Option<&'a str>,
    pub author_name: Option<&'a str>,
}

impl<'a> CommitPayload<'a> {
    pub fn new(slug: &'a str, path: &'a str) -> Self {
        Self {
            slug,
            path,
            ..Self::default()
        }
    }

    pub fn with_collection(mut self, collection: &'a CollectionConfig) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn with_author_login(mut self, login: &'a str) -> Self {
        self.author_login = Some(login);
        self
    }

    pub fn with_author_name(mut self, name: &'a str) -> Self {
        self.author_name = Some(name);
        self
    }
}

/// Builds commit messages from custom or built-in templates
pub struct CommitMessageFormatter<'a> {
    messages: &'a CommitMessages,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> CommitMessageFormatter<'a> {
    /// Create a formatter using the config's custom templates and tracing
    /// warnings
    pub fn new(config: &'a Config) -> Self {
        Self {
            messages: &config.backend.commit_messages,
            sink: &TracingSink,
        }
    }

    /// Set where unknown-token warnings go
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    /// Format the message for `action`
    ///
    /// In open authoring mode the message is wrapped by the `openAuthoring`
    /// template and only the wrapped result is returned.
    pub fn format(
        &self,
        action: Action,
        payload: &CommitPayload<'_>,
        is_open_authoring: bool,
    ) -> String {
        let template = self
            .messages
            .get(action)
            .unwrap_or_else(|| action.default_template());

        let label = payload
            .collection
            .map(CollectionConfig::display_label)
            .unwrap_or(DEFAULT_COLLECTION_LABEL);

        let in_sub_folders = payload
            .collection
            .is_some_and(|c| c.content_in_sub_folders);
        let slug = if in_sub_folders {
            decode_slug(payload.slug)
        } else {
            payload.slug.into()
        };

        let author_login = payload.author_login.unwrap_or_default();
        let author_name = payload.author_name.unwrap_or_default();

        let context = TokenContext::new()
            .with_value("collection", label)
            .with_value("slug", slug)
            .with_value("path", payload.path)
            .with_value("author-login", author_login)
            .with_value("author-name", author_name);

        let message =
            resolve_with_sink(template, &context, TemplateKind::CommitMessage, self.sink);

        if !is_open_authoring {
            return message;
        }

        let wrapper = self
            .messages
            .open_authoring()
            .unwrap_or(DEFAULT_OPEN_AUTHORING_TEMPLATE);

        let context = TokenContext::new()
            .with_value("message", message)
            .with_value("author-login", author_login)
            .with_value("author-name", author_name);

        resolve_with_sink(
            wrapper,
            &context,
            TemplateKind::OpenAuthoringMessage,
            self.sink,
        )
    }
}
