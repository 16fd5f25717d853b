//! Slug assembly from a collection's slug template

use chrono::NaiveDateTime;

use crate::config::{CollectionConfig, SlugConfig};
use crate::diagnostics::{DiagnosticSink, TemplateKind, TracingSink};
use crate::entry::EntryData;
use crate::template::{resolve_with_sink, TokenContext};

use super::date::DateParts;
use super::sanitize::{decode_slug, encode_slug, prepare_slug, sanitize_slug};

/// Identifier field used when a collection does not name one
pub const DEFAULT_IDENTIFIER_FIELD: &str = "title";

/// Picks the entry field whose value becomes `{{slug}}`
pub trait IdentifierSelector {
    fn select_identifier(&self, collection: &CollectionConfig) -> String;
}

/// Uses the collection's `identifier_field`, falling back to `title`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredIdentifier;

impl IdentifierSelector for ConfiguredIdentifier {
    fn select_identifier(&self, collection: &CollectionConfig) -> String {
        collection
            .identifier_field
            .clone()
            .filter(|field| !field.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IDENTIFIER_FIELD.to_string())
    }
}

impl<F> IdentifierSelector for F
where
    F: Fn(&CollectionConfig) -> String,
{
    fn select_identifier(&self, collection: &CollectionConfig) -> String {
        self(collection)
    }
}

/// Turns an entry into the slug its collection's template describes
pub struct SlugFormatter<'a> {
    slug_config: SlugConfig,
    reference_date: Option<NaiveDateTime>,
    selector: &'a dyn IdentifierSelector,
    sink: &'a dyn DiagnosticSink,
}

impl Default for SlugFormatter<'_> {
    fn default() -> Self {
        Self {
            slug_config: SlugConfig::default(),
            reference_date: None,
            selector: &ConfiguredIdentifier,
            sink: &TracingSink,
        }
    }
}

impl<'a> SlugFormatter<'a> {
    /// Create a formatter with default slug options, the current local
    /// time, and tracing warnings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sanitizing options for flattened slugs
    pub fn with_slug_config(mut self, config: SlugConfig) -> Self {
        self.slug_config = config;
        self
    }

    /// Use a fixed local date-time for the date sub-tokens
    pub fn with_reference_date(mut self, date: NaiveDateTime) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Set how the identifier field is chosen
    pub fn with_selector(mut self, selector: &'a dyn IdentifierSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Set where unknown-token warnings go
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    /// Format the slug for `entry` in `collection`
    ///
    /// With `content_in_sub_folders` the identifier is percent-decoded before
    /// use and the result is percent-encoded as one component; otherwise the
    /// result is flattened into a single sanitized segment.
    pub fn format(&self, collection: &CollectionConfig, entry: &EntryData) -> String {
        let template = collection.slug_template();
        let field = self.selector.select_identifier(collection);
        let identifier = entry.get(&field).unwrap_or_default();

        let slug = if collection.content_in_sub_folders {
            prepare_slug(&decode_slug(&identifier))
        } else {
            prepare_slug(&identifier)
        };

        let dates = match &self.reference_date {
            Some(date) => DateParts::from_datetime(date),
            None => DateParts::now(),
        };

        let context = TokenContext::new()
            .with_value("slug", slug)
            .with_fields(entry)
            .with_dates(dates);

        let resolved = resolve_with_sink(template, &context, TemplateKind::Slug, self.sink);

        if collection.content_in_sub_folders {
            encode_slug(&resolved)
        } else {
            sanitize_slug(&resolved, &self.slug_config)
        }
    }
}
