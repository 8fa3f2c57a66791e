//! Catalog consistency issues.

use crate::{
    core::{
        ReviewContext, ReviewStyle,
        data::{CatalogEntry, IssueKind, SourceLocation},
    },
    issues::{CatalogIssue, Rule},
    rules::helpers::is_enabled,
};

pub fn check_catalog_issues(ctx: &ReviewContext) -> Vec<CatalogIssue> {
    check_catalog(&ctx.review_data().catalog, ctx.style())
}

/// One issue per problem recorded on an entry by the consistency checker.
pub fn check_catalog(entries: &[CatalogEntry], style: ReviewStyle) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    for entry in entries {
        for (kind, explanation) in &entry.issues {
            let rule = catalog_rule(*kind);
            if !is_enabled(style, rule) {
                continue;
            }
            issues.push(CatalogIssue {
                rule,
                location: SourceLocation::new(&entry.file_path, entry.line, 1),
                source: entry.source.clone(),
                explanation: explanation.clone(),
            });
        }
    }
    issues
}

fn catalog_rule(kind: IssueKind) -> Rule {
    match kind {
        IssueKind::PrintfMismatch => Rule::PrintfMismatch,
        IssueKind::SuspectSource => Rule::SuspectL10nString,
        IssueKind::AcceleratorMismatch => Rule::AcceleratorMismatch,
        IssueKind::ContainsUrl => Rule::L10nContainsUrl,
    }
}
