//! Content problems in translatable strings: URLs, lone number
//! placeholders, surrounding spaces and malformed markup.

use crate::{
    core::{ReviewContext, ReviewStyle, data::StringRecord, scanner::ScanResults},
    issues::{Rule, StringContentIssue},
    rules::helpers::is_enabled,
};

pub fn check_string_content_issues(ctx: &ReviewContext) -> Vec<StringContentIssue> {
    check_string_content(&ctx.review_data().sources, ctx.style())
}

pub fn check_string_content(results: &ScanResults, style: ReviewStyle) -> Vec<StringContentIssue> {
    let buckets: [(Rule, &[StringRecord]); 4] = [
        (Rule::L10nContainsUrl, &results.localizable_with_urls),
        (Rule::PrintfSingleNumber, &results.printf_single_number),
        (Rule::L10nHasSurroundingSpaces, &results.surrounding_spaces),
        (Rule::MalformedStrings, &results.malformed),
    ];

    buckets
        .into_iter()
        .filter(|(rule, _)| is_enabled(style, *rule))
        .flat_map(|(rule, records)| {
            records.iter().map(move |record| StringContentIssue {
                rule,
                record: record.clone(),
            })
        })
        .collect()
}
