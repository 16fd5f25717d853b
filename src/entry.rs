//! Entry records whose fields are looked up by dotted path

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when building entry data
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("Failed to parse entry JSON: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Entry data must be a JSON object")]
    NotAnObject,
}

/// Field values of a content entry
///
/// The key set is only known at runtime, so values are kept as JSON and
/// coerced to strings on lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryData {
    fields: Map<String, Value>,
}

impl EntryData {
    /// Create empty entry data
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self, EntryError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(EntryError::NotAnObject),
        }
    }

    /// Parse entry data from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, EntryError> {
        Self::from_value(serde_json::from_str(content)?)
    }

    /// Set a top-level string field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), Value::String(value.into()));
        self
    }

    /// Look up a dotted path (`author.name`) and coerce the value to a string
    ///
    /// Missing keys and `null` are `None`.
    pub fn get(&self, path: &str) -> Option<String> {
        let mut parts = path.split('.');
        let mut current = self.fields.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        coerce(current)
    }
}

impl<K, V> FromIterator<(K, V)> for EntryData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |entry, (k, v)| entry.with_field(k, v))
    }
}

fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Arrays and objects keep their JSON text
        _ => Some(value.to_string()),
    }
}
