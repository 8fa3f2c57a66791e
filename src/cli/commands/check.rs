use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{CommandResult, helper::finish};

use crate::{
    core::ReviewContext,
    issues::Issue,
    rules::{
        catalog::check_catalog_issues,
        findings::check_finding_issues,
        not_available::check_not_available_issues,
        string_content::check_string_content_issues,
        suspect::{check_suspect_string_issues, check_suspect_usage_issues},
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ReviewContext::new(&cmd.common)?;

    let mut all_issues: Vec<Issue> = Vec::new();
    all_issues.extend(
        check_not_available_issues(&ctx)
            .into_iter()
            .map(Issue::NotAvailable),
    );
    all_issues.extend(
        check_suspect_string_issues(&ctx)
            .into_iter()
            .map(Issue::SuspectString),
    );
    all_issues.extend(
        check_suspect_usage_issues(&ctx)
            .into_iter()
            .map(Issue::SuspectUsage),
    );
    all_issues.extend(
        check_string_content_issues(&ctx)
            .into_iter()
            .map(Issue::StringContent),
    );
    all_issues.extend(check_finding_issues(&ctx).into_iter().map(Issue::Finding));
    all_issues.extend(check_catalog_issues(&ctx).into_iter().map(Issue::Catalog));

    Ok(finish(all_issues, ctx.stats()))
}
