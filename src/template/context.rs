//! Named values available to a template

use std::borrow::Cow;
use std::collections::HashMap;

use crate::entry::EntryData;
use crate::slug::DateParts;

/// Prefix for entry field lookups (`{{fields.title}}`)
pub const FIELDS_PREFIX: &str = "fields.";

/// Value providers consulted when resolving a token
///
/// Precedence: built-in values, then `fields.*` against the entry, then
/// date sub-tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenContext<'a> {
    builtins: HashMap<String, String>,
    fields: Option<&'a EntryData>,
    dates: Option<DateParts>,
}

impl<'a> TokenContext<'a> {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a built-in value
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.builtins.insert(name.into(), value.into());
        self
    }

    /// Make entry fields reachable through `fields.<path>`
    pub fn with_fields(mut self, fields: &'a EntryData) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Make date sub-tokens (`year`, `month`, ...) available
    pub fn with_dates(mut self, dates: DateParts) -> Self {
        self.dates = Some(dates);
        self
    }

    /// Resolve a token name
    ///
    /// A `fields.*` token resolves to an empty string when the entry lacks
    /// the field; it is only unknown when no entry is attached.
    pub fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        if let Some(value) = self.builtins.get(name) {
            return Some(Cow::Borrowed(value.as_str()));
        }

        if let (Some(fields), Some(path)) = (self.fields, name.strip_prefix(FIELDS_PREFIX)) {
            return Some(Cow::Owned(fields.get(path).unwrap_or_default()));
        }

        self.dates
            .as_ref()
            .and_then(|dates| dates.get(name))
            .map(Cow::Borrowed)
    }
}
