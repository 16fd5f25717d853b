//! Lexer for `{{token}}` templates using logos

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Segment {
    /// `{{name}}`, the name is everything between the braces up to the first `}`
    #[regex(r"\{\{[^}]+\}\}", |lex| {
        let s = lex.slice();
        s[2..s.len() - 2].to_string()
    })]
    Placeholder(String),

    /// Literal text without an opening brace
    #[regex(r"[^{]+")]
    Text,

    /// A brace that does not start a placeholder, kept literally
    #[token("{")]
    Brace,
}

/// Lex a template into segments with spans
///
/// The spans tile the whole template. A `{{` that never closes comes back
/// as literal braces and text; scanning resumes one character after the
/// failed match, like a regex scan would.
pub fn lex(template: &str) -> impl Iterator<Item = (Segment, Span)> + '_ {
    let mut offset = 0;
    let mut lexer = Segment::lexer(template);

    std::iter::from_fn(move || {
        let result = lexer.next()?;
        let local = lexer.span();
        let start = offset + local.start;

        match result {
            Ok(segment) => Some((segment, start..offset + local.end)),
            Err(()) => {
                let rest = &template[start..];
                let width = rest.chars().next().map_or(1, char::len_utf8);
                let literal = if rest.starts_with('{') {
                    Segment::Brace
                } else {
                    Segment::Text
                };
                offset = start + width;
                lexer = Segment::lexer(&template[offset..]);
                Some((literal, start..offset))
            }
        }
    })
}

/// Every placeholder occurrence in template order
pub fn placeholders(template: &str) -> Vec<(String, Span)> {
    lex(template)
        .filter_map(|(seg, span)| match seg {
            Segment::Placeholder(name) => Some((name, span)),
            _ => None,
        })
        .collect()
}
