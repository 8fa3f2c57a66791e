//! Translatable strings that look internal, and translation calls used
//! inside debug or logging calls.

use crate::{
    core::{ReviewContext, ReviewStyle, scanner::ScanResults},
    issues::{SuspectStringIssue, SuspectUsageIssue},
};

pub fn check_suspect_string_issues(ctx: &ReviewContext) -> Vec<SuspectStringIssue> {
    check_suspect_strings(&ctx.review_data().sources, ctx.style())
}

pub fn check_suspect_usage_issues(ctx: &ReviewContext) -> Vec<SuspectUsageIssue> {
    check_suspect_usages(&ctx.review_data().sources, ctx.style())
}

/// Reads the bucket filled by the finalize pass, so resource string tables
/// are covered along with source files.
pub fn check_suspect_strings(results: &ScanResults, style: ReviewStyle) -> Vec<SuspectStringIssue> {
    if !style.contains(ReviewStyle::SUSPECT_L10N_STRING) {
        return Vec::new();
    }
    results
        .unsafe_localizable
        .iter()
        .map(|record| SuspectStringIssue {
            record: record.clone(),
        })
        .collect()
}

pub fn check_suspect_usages(results: &ScanResults, style: ReviewStyle) -> Vec<SuspectUsageIssue> {
    if !style.contains(ReviewStyle::SUSPECT_L10N_USAGE) {
        return Vec::new();
    }
    results
        .localizable_in_internal_call
        .iter()
        .map(|record| SuspectUsageIssue {
            record: record.clone(),
        })
        .collect()
}
