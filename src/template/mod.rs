//! Template resolution for `{{token}}` placeholders
//!
//! Templates are plain strings with placeholders such as `{{slug}}`,
//! `{{fields.title}}` or `{{author-login}}`. Resolution looks each token up
//! in a [`TokenContext`] and substitutes its value. Unknown tokens are
//! replaced by an empty string and reported, never left in the output.
//!
//! # Example
//!
//! ```rust
//! use cms_fmt::template::{resolve_template, TokenContext};
//!
//! let ctx = TokenContext::new().with_value("slug", "doc-slug");
//! let resolution = resolve_template("Update {{slug}}{{oops}}", &ctx);
//! assert_eq!(resolution.output, "Update doc-slug");
//! assert_eq!(resolution.unknown[0].name, "oops");
//! ```

mod context;
pub mod lexer;
mod resolver;

pub use context::{TokenContext, FIELDS_PREFIX};
pub use lexer::{placeholders, Span};
pub use resolver::{resolve, resolve_template, resolve_with_sink, Resolution};
