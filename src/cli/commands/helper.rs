use super::CommandResult;
use crate::core::ReviewStats;
use crate::issues::{Issue, Severity};

pub fn finish(mut issues: Vec<Issue>, stats: ReviewStats) -> CommandResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        issues,
        error_count,
        warning_count,
        stats,
    }
}
