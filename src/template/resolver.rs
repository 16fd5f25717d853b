//! Token substitution over a lexed template

use crate::diagnostics::{unknown_variable_message, DiagnosticSink, TemplateKind};
use crate::error::UnknownToken;

use super::context::TokenContext;
use super::lexer::{lex, Segment, Span};

/// Substituted output plus every token that could not be resolved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub output: String,
    pub unknown: Vec<UnknownToken>,
}

impl Resolution {
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty()
    }
}

/// Substitute every `{{token}}` in `template` from `context`
///
/// Unresolved tokens become empty strings and `on_unknown` is called once
/// per occurrence. Substitution always runs to the end of the template.
pub fn resolve(
    template: &str,
    context: &TokenContext<'_>,
    mut on_unknown: impl FnMut(&str),
) -> String {
    substitute(template, context, |name, _| on_unknown(name))
}

/// Substitute tokens and collect unknown ones with their spans
pub fn resolve_template(template: &str, context: &TokenContext<'_>) -> Resolution {
    let mut unknown = Vec::new();
    let output = substitute(template, context, |name, span| {
        unknown.push(UnknownToken::new(name, span));
    });
    Resolution { output, unknown }
}

/// Substitute tokens, sending one warning per unknown token to `sink`
pub fn resolve_with_sink(
    template: &str,
    context: &TokenContext<'_>,
    kind: TemplateKind,
    sink: &dyn DiagnosticSink,
) -> String {
    resolve(template, context, |name| {
        sink.warn(&unknown_variable_message(name, kind))
    })
}

fn substitute(
    template: &str,
    context: &TokenContext<'_>,
    mut on_unknown: impl FnMut(&str, Span),
) -> String {
    let mut output = String::with_capacity(template.len());

    for (segment, span) in lex(template) {
        match segment {
            Segment::Placeholder(name) => match context.lookup(&name) {
                Some(value) => output.push_str(&value),
                None => on_unknown(&name, span),
            },
            Segment::Text | Segment::Brace => output.push_str(&template[span]),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use pretty_assertions::assert_eq;

    fn commit_context() -> TokenContext<'static> {
        TokenContext::new()
            .with_value("collection", "Collection")
            .with_value("slug", "doc-slug")
    }

    #[test]
    fn test_substitutes_known_tokens() {
        let out = resolve(r#"Create {{collection}} "{{slug}}""#, &commit_context(), |_| {
            panic!("no unknown tokens expected")
        });
        assert_eq!(out, r#"Create Collection "doc-slug""#);
    }

    #[test]
    fn test_template_without_tokens_is_verbatim() {
        let out = resolve("Custom commit message", &TokenContext::new(), |_| {});
        assert_eq!(out, "Custom commit message");
    }

    #[test]
    fn test_unknown_tokens_become_empty() {
        let mut seen = Vec::new();
        let out = resolve(
            r#"{{slug}} with "{{unknown variable}}""#,
            &commit_context(),
            |name| seen.push(name.to_string()),
        );
        assert_eq!(out, r#"doc-slug with """#);
        assert_eq!(seen, vec!["unknown variable"]);
    }

    #[test]
    fn test_unknown_reported_per_occurrence() {
        let resolution = resolve_template("{{a}}-{{slug}}-{{a}}", &commit_context());
        assert_eq!(resolution.output, "-doc-slug-");
        assert_eq!(
            resolution.unknown,
            vec![UnknownToken::new("a", 0..5), UnknownToken::new("a", 15..20)]
        );
        assert!(!resolution.is_clean());
    }

    #[test]
    fn test_literal_braces_survive() {
        let resolution = resolve_template("{slug} {{}} {{slug}", &commit_context());
        assert_eq!(resolution.output, "{slug} {{}} {{slug}");
        assert!(resolution.is_clean());
    }

    #[test]
    fn test_unclosed_placeholders_keep_their_text() {
        for (template, expected) in [
            ("{{ab}c}}", "{{ab}c}}"),
            ("x{{a}", "x{{a}"),
            ("Fix {{slug} in {{collection}}", "Fix {{slug} in Collection"),
            ("{{slug}}{{", "doc-slug{{"),
        ] {
            let resolution = resolve_template(template, &commit_context());
            assert_eq!(resolution.output, expected);
            assert!(resolution.is_clean());
        }
    }

    #[test]
    fn test_values_are_not_expanded_again() {
        let ctx = TokenContext::new().with_value("collection", "{{slug}}");
        let out = resolve("{{collection}}", &ctx, |_| {});
        assert_eq!(out, "{{slug}}");
    }

    #[test]
    fn test_sink_receives_kind_specific_message() {
        let sink = RecordingSink::new();
        let out = resolve_with_sink(
            "{{author-email}}: {{slug}}",
            &commit_context(),
            TemplateKind::OpenAuthoringMessage,
            &sink,
        );
        assert_eq!(out, ": doc-slug");
        assert_eq!(
            sink.messages(),
            vec!["Ignoring unknown variable \"author-email\" in open authoring message template."]
        );
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        let out = resolve("Créer «{{slug}}»", &commit_context(), |_| {});
        assert_eq!(out, "Créer «doc-slug»");
    }
}
