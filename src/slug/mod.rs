//! Slug generation for content entries
//!
//! A slug is built from the collection's slug template (`{{slug}}` by
//! default). `{{slug}}` is the prepared identifier field, `{{fields.*}}`
//! reads entry fields as-is, and `{{year}}` through `{{second}}` come from a
//! reference date.

mod date;
mod formatter;
mod sanitize;

pub use date::{decompose, DateParts, DATE_TOKENS};
pub use formatter::{
    ConfiguredIdentifier, IdentifierSelector, SlugFormatter, DEFAULT_IDENTIFIER_FIELD,
};
pub use sanitize::{decode_slug, encode_slug, is_valid_slug_char, prepare_slug, sanitize_slug};
