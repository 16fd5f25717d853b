//! Configuration for collections, commit messages and slugs
//!
//! Loaded from TOML:
//!
//! ```toml
//! [backend.commit_messages]
//! create = "Create {{collection}} “{{slug}}”"
//! openAuthoring = "{{author-login}}: {{message}}"
//!
//! [slug]
//! encoding = "ascii"
//! sanitize_replacement = "_"
//!
//! [[collections]]
//! name = "posts"
//! label_singular = "Post"
//! slug = "{{year}}-{{month}}-{{day}}_{{slug}}"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::commit::Action;
use crate::error::ConfigError;
use crate::slug::is_valid_slug_char;

/// Slug template used when a collection does not set one
pub const DEFAULT_SLUG_TEMPLATE: &str = "{{slug}}";

/// Label used when a collection has neither `label_singular` nor `label`
pub const DEFAULT_COLLECTION_LABEL: &str = "Collection";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub slug: SlugConfig,
    pub collections: Vec<CollectionConfig>,
}

impl Config {
    /// Create a configuration with defaults everywhere
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.slug.validate()?;
        Ok(config)
    }

    /// Find a collection by name
    pub fn collection(&self, name: &str) -> Result<&CollectionConfig, ConfigError> {
        self.collections
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ConfigError::UnknownCollection {
                name: name.to_string(),
            })
    }

    /// Set the custom commit message templates
    pub fn with_commit_messages(mut self, messages: CommitMessages) -> Self {
        self.backend.commit_messages = messages;
        self
    }

    /// Set the slug options
    pub fn with_slug(mut self, slug: SlugConfig) -> Self {
        self.slug = slug;
        self
    }

    /// Add a collection
    pub fn with_collection(mut self, collection: CollectionConfig) -> Self {
        self.collections.push(collection);
        self
    }
}

/// Version-control backend options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub commit_messages: CommitMessages,
}

/// Custom commit message templates, keyed like the backend config
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommitMessages {
    pub create: Option<String>,
    pub update: Option<String>,
    pub delete: Option<String>,
    pub upload_media: Option<String>,
    pub delete_media: Option<String>,
    pub open_authoring: Option<String>,
}

impl CommitMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom template for an action, if set and not blank
    pub fn get(&self, action: Action) -> Option<&str> {
        let template = match action {
            Action::Create => &self.create,
            Action::Update => &self.update,
            Action::Delete => &self.delete,
            Action::UploadMedia => &self.upload_media,
            Action::DeleteMedia => &self.delete_media,
        };
        non_blank(template)
    }

    /// Custom open authoring wrapper, if set and not blank
    pub fn open_authoring(&self) -> Option<&str> {
        non_blank(&self.open_authoring)
    }

    /// Set the template for an action
    pub fn with_template(mut self, action: Action, template: impl Into<String>) -> Self {
        let slot = match action {
            Action::Create => &mut self.create,
            Action::Update => &mut self.update,
            Action::Delete => &mut self.delete,
            Action::UploadMedia => &mut self.upload_media,
            Action::DeleteMedia => &mut self.delete_media,
        };
        *slot = Some(template.into());
        self
    }

    /// Set the open authoring wrapper template
    pub fn with_open_authoring(mut self, template: impl Into<String>) -> Self {
        self.open_authoring = Some(template.into());
        self
    }
}

/// Character set allowed in sanitized slugs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugEncoding {
    /// URI characters plus non-ASCII IRI characters
    #[default]
    Unicode,
    /// URI characters only
    Ascii,
}

/// Options for sanitizing flattened slugs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    pub encoding: SlugEncoding,
    /// Replaces every character that is not allowed in a slug
    pub sanitize_replacement: String,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            encoding: SlugEncoding::Unicode,
            sanitize_replacement: "-".to_string(),
        }
    }
}

impl SlugConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed character set
    pub fn with_encoding(mut self, encoding: SlugEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the replacement for disallowed characters
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.sanitize_replacement = replacement.into();
        self
    }

    /// The replacement must itself be a valid slug fragment
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = self
            .sanitize_replacement
            .chars()
            .all(|c| is_valid_slug_char(c, self.encoding));
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidReplacement {
                replacement: self.sanitize_replacement.clone(),
            })
        }
    }
}

/// A content collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub name: String,
    pub label: Option<String>,
    pub label_singular: Option<String>,
    /// Custom slug template
    pub slug: Option<String>,
    /// Entry field that names an entry, used for `{{slug}}`
    pub identifier_field: Option<String>,
    /// Whether slugs may span several path segments
    pub content_in_sub_folders: bool,
}

impl CollectionConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Singular label, else plural label, else a generic fallback
    pub fn display_label(&self) -> &str {
        non_blank(&self.label_singular)
            .or_else(|| non_blank(&self.label))
            .unwrap_or(DEFAULT_COLLECTION_LABEL)
    }

    /// The configured slug template, or `{{slug}}`
    pub fn slug_template(&self) -> &str {
        non_blank(&self.slug).unwrap_or(DEFAULT_SLUG_TEMPLATE)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_label_singular(mut self, label: impl Into<String>) -> Self {
        self.label_singular = Some(label.into());
        self
    }

    pub fn with_slug_template(mut self, template: impl Into<String>) -> Self {
        self.slug = Some(template.into());
        self
    }

    pub fn with_identifier_field(mut self, field: impl Into<String>) -> Self {
        self.identifier_field = Some(field.into());
        self
    }

    pub fn with_content_in_sub_folders(mut self, enabled: bool) -> Self {
        self.content_in_sub_folders = enabled;
        self
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.collections.is_empty());
        assert_eq!(config.slug.encoding, SlugEncoding::Unicode);
        assert_eq!(config.slug.sanitize_replacement, "-");
        assert_eq!(config.backend.commit_messages.get(Action::Create), None);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_str(
            r#"
            [backend.commit_messages]
            create = "New {{slug}}"
            uploadMedia = "Add {{path}}"
            openAuthoring = "{{author-login}}: {{message}}"

            [slug]
            encoding = "ascii"
            sanitize_replacement = "_"

            [[collections]]
            name = "posts"
            label = "Posts"
            label_singular = "Post"
            slug = "{{year}}-{{slug}}"
            identifier_field = "headline"
            content_in_sub_folders = true
            "#,
        )
        .unwrap();

        let messages = &config.backend.commit_messages;
        assert_eq!(messages.get(Action::Create), Some("New {{slug}}"));
        assert_eq!(messages.get(Action::UploadMedia), Some("Add {{path}}"));
        assert_eq!(messages.get(Action::Update), None);
        assert_eq!(messages.open_authoring(), Some("{{author-login}}: {{message}}"));
        assert_eq!(config.slug.encoding, SlugEncoding::Ascii);
        assert_eq!(config.slug.sanitize_replacement, "_");

        let posts = config.collection("posts").unwrap();
        assert_eq!(posts.display_label(), "Post");
        assert_eq!(posts.slug_template(), "{{year}}-{{slug}}");
        assert_eq!(posts.identifier_field.as_deref(), Some("headline"));
        assert!(posts.content_in_sub_folders);
    }

    #[test]
    fn test_blank_templates_are_absent() {
        let messages = CommitMessages::new()
            .with_template(Action::Delete, "   ")
            .with_open_authoring("");
        assert_eq!(messages.get(Action::Delete), None);
        assert_eq!(messages.open_authoring(), None);
        assert_eq!(
            CollectionConfig::new("posts").with_slug_template("").slug_template(),
            DEFAULT_SLUG_TEMPLATE
        );
    }

    #[test]
    fn test_label_fallbacks() {
        let collection = CollectionConfig::new("posts");
        assert_eq!(collection.display_label(), "Collection");

        let collection = collection.with_label("Posts");
        assert_eq!(collection.display_label(), "Posts");

        let collection = collection.with_label_singular("Post");
        assert_eq!(collection.display_label(), "Post");
    }

    #[test]
    fn test_unknown_collection() {
        let err = Config::default().collection("pages").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCollection { name } if name == "pages"));
    }

    #[test]
    fn test_invalid_replacement_rejected() {
        let result = Config::from_str(
            r#"
            [slug]
            sanitize_replacement = "/"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidReplacement { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_str("[[collections]"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
