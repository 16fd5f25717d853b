//! Static checks for configured templates
//!
//! Resolves every custom template against the tokens its kind supports and
//! reports the ones that would be dropped at format time.

use crate::commit::Action;
use crate::config::Config;
use crate::diagnostics::TemplateKind;
use crate::entry::EntryData;
use crate::error::UnknownToken;
use crate::slug::DateParts;
use crate::template::{resolve_template, TokenContext};

/// Tokens a commit message template may use
pub const COMMIT_MESSAGE_TOKENS: [&str; 5] =
    ["collection", "slug", "path", "author-login", "author-name"];

/// Tokens an open authoring template may use
pub const OPEN_AUTHORING_TOKENS: [&str; 3] = ["message", "author-login", "author-name"];

/// An unknown token found in a configured template
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    /// Where the template is configured, e.g. `backend.commit_messages.create`
    pub location: String,
    pub kind: TemplateKind,
    pub template: String,
    pub token: UnknownToken,
}

impl LintWarning {
    /// Format the warning with template context
    pub fn format(&self) -> String {
        self.token.format(&self.template, self.kind, &self.location)
    }
}

/// Check every custom template in `config`
pub fn check(config: &Config) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let messages = &config.backend.commit_messages;

    for action in Action::ALL {
        if let Some(template) = messages.get(action) {
            check_template(
                format!("backend.commit_messages.{}", action),
                template,
                TemplateKind::CommitMessage,
                &mut warnings,
            );
        }
    }

    if let Some(template) = messages.open_authoring() {
        check_template(
            "backend.commit_messages.openAuthoring".to_string(),
            template,
            TemplateKind::OpenAuthoringMessage,
            &mut warnings,
        );
    }

    for collection in &config.collections {
        if collection.slug.is_some() {
            check_template(
                format!("collections.{}.slug", collection.name),
                collection.slug_template(),
                TemplateKind::Slug,
                &mut warnings,
            );
        }
    }

    warnings
}

/// Unknown tokens in a single template of the given kind
pub fn unknown_tokens(template: &str, kind: TemplateKind) -> Vec<UnknownToken> {
    let entry = EntryData::new();
    let context = match kind {
        TemplateKind::CommitMessage => probe(&COMMIT_MESSAGE_TOKENS),
        TemplateKind::OpenAuthoringMessage => probe(&OPEN_AUTHORING_TOKENS),
        TemplateKind::Slug => probe(&["slug"])
            .with_fields(&entry)
            .with_dates(DateParts::now()),
    };
    resolve_template(template, &context).unknown
}

fn probe<'a>(names: &[&str]) -> TokenContext<'a> {
    names
        .iter()
        .fold(TokenContext::new(), |ctx, name| ctx.with_value(*name, ""))
}

fn check_template(
    location: String,
    template: &str,
    kind: TemplateKind,
    warnings: &mut Vec<LintWarning>,
) {
    for token in unknown_tokens(template, kind) {
        warnings.push(LintWarning {
            location: location.clone(),
            kind,
            template: template.to_string(),
            token,
        });
    }
}
