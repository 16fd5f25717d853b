//! Slug normalization and path-segment sanitizing

use std::borrow::Cow;

use crate::config::{SlugConfig, SlugEncoding};

/// IRI `ucschar` ranges (RFC 3987), allowed under the unicode encoding
const UCS_RANGES: &[(char, char)] = &[
    ('\u{A0}', '\u{D7FF}'),
    ('\u{F900}', '\u{FDCF}'),
    ('\u{FDF0}', '\u{FFEF}'),
    ('\u{10000}', '\u{1FFFD}'),
    ('\u{20000}', '\u{2FFFD}'),
    ('\u{30000}', '\u{3FFFD}'),
    ('\u{40000}', '\u{4FFFD}'),
    ('\u{50000}', '\u{5FFFD}'),
    ('\u{60000}', '\u{6FFFD}'),
    ('\u{70000}', '\u{7FFFD}'),
    ('\u{80000}', '\u{8FFFD}'),
    ('\u{90000}', '\u{9FFFD}'),
    ('\u{A0000}', '\u{AFFFD}'),
    ('\u{B0000}', '\u{BFFFD}'),
    ('\u{C0000}', '\u{CFFFD}'),
    ('\u{D0000}', '\u{DFFFD}'),
    ('\u{E1000}', '\u{EFFFD}'),
];

/// Normalize a raw identifier into a slug fragment
///
/// Trims, lowercases, drops single quotes and turns periods into hyphens.
/// Spaces and slashes are left for [`sanitize_slug`] or [`encode_slug`].
pub fn prepare_slug(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace('\'', "")
        // dropping a quote can expose whitespace at either end
        .trim()
        .replace('.', "-")
}

/// Whether a character may appear in a flattened slug
pub fn is_valid_slug_char(c: char, encoding: SlugEncoding) -> bool {
    let uri = c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '~');
    match encoding {
        SlugEncoding::Ascii => uri,
        SlugEncoding::Unicode => {
            uri || UCS_RANGES
                .iter()
                .any(|&(start, end)| (start..=end).contains(&c))
        }
    }
}

/// `%` followed by two hex digits
fn is_percent_escape(chars: &[char]) -> bool {
    matches!(chars, ['%', a, b, ..] if a.is_ascii_hexdigit() && b.is_ascii_hexdigit())
}

/// Flatten a resolved slug into a single path segment
///
/// Every disallowed character (slashes and spaces included) becomes the
/// configured replacement, as do trailing periods. Percent escapes already
/// in the slug stay visible. Repeated replacements collapse to one and none
/// are left at either end.
pub fn sanitize_slug(resolved: &str, config: &SlugConfig) -> String {
    let replacement = config.sanitize_replacement.as_str();
    let kept = resolved.trim_end_matches('.');
    let trailing_dots = resolved.len() - kept.len();

    let chars: Vec<char> = kept.chars().collect();
    let mut out = String::with_capacity(resolved.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_percent_escape(&chars[i..]) {
            out.extend(&chars[i..i + 3]);
            i += 3;
            continue;
        }
        if is_valid_slug_char(c, config.encoding) {
            out.push(c);
        } else {
            out.push_str(replacement);
        }
        i += 1;
    }
    if trailing_dots > 0 {
        out.push_str(replacement);
    }

    if replacement.is_empty() {
        return out;
    }

    out.split(replacement)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(replacement)
}

/// Percent-encode a resolved slug as one URI component
pub fn encode_slug(resolved: &str) -> String {
    urlencoding::encode(resolved).into_owned()
}

/// Percent-decode a slug, keeping it as-is when it does not decode to UTF-8
pub fn decode_slug(slug: &str) -> Cow<'_, str> {
    urlencoding::decode(slug).unwrap_or(Cow::Borrowed(slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prepare_trims() {
        assert_eq!(prepare_slug(" slug "), "slug");
    }

    #[test]
    fn test_prepare_lowercases() {
        assert_eq!(prepare_slug("Slug"), "slug");
    }

    #[test]
    fn test_prepare_removes_single_quotes() {
        assert_eq!(prepare_slug("sl'ug"), "slug");
    }

    #[test]
    fn test_prepare_replaces_periods() {
        assert_eq!(prepare_slug("sl.ug"), "sl-ug");
    }

    #[test]
    fn test_prepare_keeps_spaces_and_slashes() {
        assert_eq!(prepare_slug("Post Title/2019"), "post title/2019");
    }

    #[test]
    fn test_prepare_is_idempotent() {
        for raw in [" Slug ", "sl'ug", "a.b.c", "' Quoted '", "Ünïcode Title", "", "  ", "x/y z"] {
            let once = prepare_slug(raw);
            assert_eq!(prepare_slug(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_sanitize_replaces_spaces_and_slashes() {
        let config = SlugConfig::default();
        assert_eq!(sanitize_slug("post title", &config), "post-title");
        assert_eq!(sanitize_slug("sub_dir/post title", &config), "sub_dir-post-title");
    }

    #[test]
    fn test_sanitize_collapses_and_trims_replacements() {
        let config = SlugConfig::default();
        assert_eq!(sanitize_slug("/a  //  b/", &config), "a-b");
        assert_eq!(sanitize_slug("a - b", &config), "a-b");
    }

    #[test]
    fn test_sanitize_trailing_periods() {
        let config = SlugConfig::default();
        assert_eq!(sanitize_slug("version 1.0...", &config), "version-1.0");
        assert_eq!(sanitize_slug("..", &config), "");
    }

    #[test]
    fn test_sanitize_unicode_encoding_keeps_letters() {
        let config = SlugConfig::default();
        assert_eq!(sanitize_slug("café crème", &config), "café-crème");
    }

    #[test]
    fn test_sanitize_ascii_encoding() {
        let config = SlugConfig::default().with_encoding(SlugEncoding::Ascii);
        assert_eq!(sanitize_slug("café crème", &config), "caf-cr-me");
    }

    #[test]
    fn test_sanitize_custom_replacement() {
        let config = SlugConfig::default().with_replacement("_");
        assert_eq!(sanitize_slug("post title/2019", &config), "post_title_2019");
    }

    #[test]
    fn test_sanitize_keeps_percent_escapes() {
        let config = SlugConfig::default();
        assert_eq!(sanitize_slug("2019%2fslug", &config), "2019%2fslug");
        assert_eq!(sanitize_slug("100% sure", &config), "100-sure");
        assert_eq!(sanitize_slug("a%2", &config), "a-2");
        assert_eq!(sanitize_slug("sub_dir/post title", &config), "sub_dir-post-title");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let config = SlugConfig::default();
        for raw in ["Sub Dir/post title.", "2019%2Fslug", "50 % off%"] {
            let once = sanitize_slug(raw, &config);
            assert_eq!(sanitize_slug(&once, &config), once);
        }
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_slug("sub_dir/post title"), "sub_dir%2Fpost%20title");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_slug("2019%2Fslug"), "2019/slug");
        assert_eq!(decode_slug("plain"), "plain");
        // invalid UTF-8 after decoding
        assert_eq!(decode_slug("bad%FF"), "bad%FF");
    }
}
