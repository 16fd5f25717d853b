//! cms-fmt - Template-driven commit messages and slugs for content entries
//!
//! This library resolves `{{token}}` templates against a content entry, its
//! collection and the commit author, producing version-control commit
//! messages and URL-safe slugs.
//!
//! # Example
//!
//! ```rust
//! use cms_fmt::{commit_message_formatter, Action, CollectionConfig, CommitPayload, Config};
//!
//! let config = Config::default();
//! let posts = CollectionConfig::new("posts").with_label_singular("Post");
//! let payload = CommitPayload::new("hello-world", "content/posts/hello-world.md")
//!     .with_collection(&posts);
//!
//! let message = commit_message_formatter(Action::Create, &config, &payload, false);
//! assert_eq!(message, r#"Create Post "hello-world""#);
//! ```

pub mod commit;
pub mod config;
pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod lint;
pub mod slug;
pub mod template;

pub use commit::{Action, CommitMessageFormatter, CommitPayload};
pub use config::{CollectionConfig, CommitMessages, Config, SlugConfig, SlugEncoding};
pub use diagnostics::{DiagnosticSink, RecordingSink, TemplateKind, TracingSink};
pub use entry::{EntryData, EntryError};
pub use error::{ConfigError, ParseActionError, UnknownToken};
pub use lint::LintWarning;
pub use slug::{prepare_slug, IdentifierSelector, SlugFormatter};

/// Format a commit message with default logging
///
/// Uses the custom template for `action` from `config` when one is set,
/// otherwise the built-in one. Unknown tokens are logged as warnings and
/// left empty.
///
/// # Example
///
/// ```rust
/// use cms_fmt::{commit_message_formatter, Action, CommitMessages, CommitPayload, Config};
///
/// let config = Config::default().with_commit_messages(
///     CommitMessages::new().with_open_authoring("{{author-login}}: {{message}}"),
/// );
/// let payload = CommitPayload::new("doc-slug", "file-path").with_author_login("octocat");
///
/// let message = commit_message_formatter(Action::UploadMedia, &config, &payload, true);
/// assert_eq!(message, r#"octocat: Upload "file-path""#);
/// ```
pub fn commit_message_formatter(
    action: Action,
    config: &Config,
    payload: &CommitPayload<'_>,
    is_open_authoring: bool,
) -> String {
    CommitMessageFormatter::new(config).format(action, payload, is_open_authoring)
}

/// Format an entry's slug with default options and the current local time
///
/// # Example
///
/// ```rust
/// use cms_fmt::{slug_formatter, CollectionConfig, EntryData};
///
/// let entry = EntryData::new().with_field("title", "Post Title");
/// assert_eq!(slug_formatter(&CollectionConfig::new("posts"), &entry), "post-title");
/// ```
pub fn slug_formatter(collection: &CollectionConfig, entry: &EntryData) -> String {
    SlugFormatter::new().format(collection, entry)
}
