//! Deprecated macros, unencoded characters, dialog fonts and formatting.

use crate::{
    core::{ReviewContext, ReviewStyle, scanner::ScanResults},
    issues::FindingIssue,
    rules::helpers::{finding_rule, is_enabled},
};

pub fn check_finding_issues(ctx: &ReviewContext) -> Vec<FindingIssue> {
    check_findings(&ctx.review_data().sources, ctx.style())
}

pub fn check_findings(results: &ScanResults, style: ReviewStyle) -> Vec<FindingIssue> {
    results
        .findings
        .iter()
        .filter_map(|finding| {
            let rule = finding_rule(&finding.kind);
            is_enabled(style, rule).then(|| FindingIssue {
                rule,
                finding: finding.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::core::data::{Finding, FindingKind, SourceLocation};
    use crate::issues::Rule;
    use crate::rules::findings::*;

    fn finding(kind: FindingKind, line: usize) -> Finding {
        Finding::new(kind, SourceLocation::new("app.cpp", line, 1), "", "")
    }

    #[test]
    fn test_check_findings() {
        let results = ScanResults {
            findings: vec![
                finding(FindingKind::Tab, 1),
                finding(FindingKind::FontName, 2),
                finding(FindingKind::WideLine { length: 130 }, 3),
            ],
            ..Default::default()
        };

        let issues = check_findings(&results, ReviewStyle::FONTS | ReviewStyle::WIDE_LINE);
        let rules: Vec<Rule> = issues.iter().map(|issue| issue.rule).collect();
        assert_eq!(rules, vec![Rule::Fonts, Rule::WideLine]);
    }
}
