//! User-facing strings that were never exposed for translation.

use crate::{
    core::{ReviewContext, ReviewStyle, scanner::ScanResults},
    issues::NotAvailableIssue,
};

pub fn check_not_available_issues(ctx: &ReviewContext) -> Vec<NotAvailableIssue> {
    check_not_available(&ctx.review_data().sources, ctx.style())
}

/// One issue per string in the `not_available` bucket.
pub fn check_not_available(results: &ScanResults, style: ReviewStyle) -> Vec<NotAvailableIssue> {
    if !style.contains(ReviewStyle::NOT_L10N_AVAILABLE) {
        return Vec::new();
    }
    results
        .not_available
        .iter()
        .map(|record| NotAvailableIssue {
            record: record.clone(),
        })
        .collect()
}
