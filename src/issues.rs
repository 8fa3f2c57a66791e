//! Issue types reported to the user.
//!
//! Every issue kind is its own struct; [`Issue`] wraps them and dispatches
//! the [`Report`] trait with `enum_dispatch`.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::data::{Finding, FindingKind, SourceLocation, StringRecord, UsageInfo};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier; displayed as the check name it is enabled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    NotL10nAvailable,
    SuspectL10nString,
    SuspectL10nUsage,
    DeprecatedMacro,
    L10nContainsUrl,
    UnencodedExtAscii,
    PrintfSingleNumber,
    L10nHasSurroundingSpaces,
    MalformedStrings,
    PrintfMismatch,
    AcceleratorMismatch,
    Fonts,
    SpaceAfterComment,
    TrailingSpaces,
    Tabs,
    WideLine,
    StraySemicolonBrace,
}

impl Rule {
    /// Errors are strings that will be wrong for users of a translated build;
    /// everything else is a warning.
    pub fn severity(self) -> Severity {
        match self {
            Rule::NotL10nAvailable
            | Rule::SuspectL10nString
            | Rule::SuspectL10nUsage
            | Rule::PrintfMismatch
            | Rule::AcceleratorMismatch => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::NotL10nAvailable => "not-l10n-available",
            Rule::SuspectL10nString => "suspect-l10n-string",
            Rule::SuspectL10nUsage => "suspect-l10n-usage",
            Rule::DeprecatedMacro => "deprecated-macro",
            Rule::L10nContainsUrl => "l10n-contains-url",
            Rule::UnencodedExtAscii => "unencoded-ext-ascii",
            Rule::PrintfSingleNumber => "printf-single-number",
            Rule::L10nHasSurroundingSpaces => "l10n-has-surrounding-spaces",
            Rule::MalformedStrings => "malformed-strings",
            Rule::PrintfMismatch => "printf-mismatch",
            Rule::AcceleratorMismatch => "accelerator-mismatch",
            Rule::Fonts => "fonts",
            Rule::SpaceAfterComment => "space-after-comment",
            Rule::TrailingSpaces => "trailing-spaces",
            Rule::Tabs => "tabs",
            Rule::WideLine => "wide-line",
            Rule::StraySemicolonBrace => "stray-semicolon-brace",
        };
        write!(f, "{}", name)
    }
}

// ============================================================
// Source String Issues
// ============================================================

/// User-facing string that is never exposed for translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAvailableIssue {
    pub record: StringRecord,
}

impl NotAvailableIssue {
    pub fn severity() -> Severity {
        Self::rule().severity()
    }

    pub fn rule() -> Rule {
        Rule::NotL10nAvailable
    }
}

/// String exposed for translation that looks internal (a path, an
/// identifier, markup...). Covers source files and resource string tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectStringIssue {
    pub record: StringRecord,
}

impl SuspectStringIssue {
    pub fn severity() -> Severity {
        Self::rule().severity()
    }

    pub fn rule() -> Rule {
        Rule::SuspectL10nString
    }
}

/// Translation call nested inside a debug or logging call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectUsageIssue {
    pub record: StringRecord,
}

impl SuspectUsageIssue {
    pub fn severity() -> Severity {
        Self::rule().severity()
    }

    pub fn rule() -> Rule {
        Rule::SuspectL10nUsage
    }
}

/// Translatable string with a content problem (URL, lone placeholder,
/// surrounding spaces, malformed markup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringContentIssue {
    pub rule: Rule,
    pub record: StringRecord,
}

// ============================================================
// Position-Only Issues
// ============================================================

/// Deprecated macro, encoding, font or formatting finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingIssue {
    pub rule: Rule,
    pub finding: Finding,
}

// ============================================================
// Catalog Issues
// ============================================================

/// Problem with one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    pub rule: Rule,
    pub location: SourceLocation,
    /// The entry's source string.
    pub source: String,
    pub explanation: String,
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found during a review.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    NotAvailable(NotAvailableIssue),
    SuspectString(SuspectStringIssue),
    SuspectUsage(SuspectUsageIssue),
    StringContent(StringContentIssue),
    Finding(FindingIssue),
    Catalog(CatalogIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location with the line for context display.
    Source {
        location: &'a SourceLocation,
        source_line: &'a str,
    },
    /// Catalog entry; no source excerpt is shown.
    Catalog(&'a SourceLocation),
}

impl<'a> ReportLocation<'a> {
    pub fn location(&self) -> &'a SourceLocation {
        match self {
            ReportLocation::Source { location, .. } => *location,
            ReportLocation::Catalog(location) => *location,
        }
    }
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (the string, the macro, the font...).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

fn source_location(record: &StringRecord) -> ReportLocation<'_> {
    ReportLocation::Source {
        location: &record.location,
        source_line: &record.source_line,
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for NotAvailableIssue {
    fn location(&self) -> ReportLocation<'_> {
        source_location(&self.record)
    }

    fn message(&self) -> String {
        self.record.text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        match &self.record.usage {
            UsageInfo::Orphan => Some("user-facing string not exposed for translation".to_string()),
            usage => Some(format!("used by {}, not exposed for translation", usage)),
        }
    }

    fn hint(&self) -> Option<&str> {
        Some("wrap the string in a translation function such as _()")
    }
}

impl Report for SuspectStringIssue {
    fn location(&self) -> ReportLocation<'_> {
        source_location(&self.record)
    }

    fn message(&self) -> String {
        self.record.text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "exposed for translation by {} but looks internal",
            self.record.usage
        ))
    }
}

impl Report for SuspectUsageIssue {
    fn location(&self) -> ReportLocation<'_> {
        source_location(&self.record)
    }

    fn message(&self) -> String {
        self.record.text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("translated string passed to a debug or logging function".to_string())
    }
}

impl Report for StringContentIssue {
    fn location(&self) -> ReportLocation<'_> {
        source_location(&self.record)
    }

    fn message(&self) -> String {
        self.record.text.clone()
    }

    fn report_severity(&self) -> Severity {
        self.rule.severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule
    }

    fn details(&self) -> Option<String> {
        let note = match self.rule {
            Rule::L10nContainsUrl => "translatable string contains a URL or email address",
            Rule::PrintfSingleNumber => "string is only a placeholder for a number",
            Rule::L10nHasSurroundingSpaces => "translatable string starts or ends with spaces",
            Rule::MalformedStrings => "string contains a malformed markup tag",
            _ => return None,
        };
        Some(note.to_string())
    }

    fn hint(&self) -> Option<&str> {
        match self.rule {
            Rule::L10nContainsUrl => Some("move the address out of the translatable string"),
            Rule::PrintfSingleNumber => Some("format the number without exposing it for translation"),
            Rule::L10nHasSurroundingSpaces => {
                Some("add the spacing in code; translators often drop it")
            }
            _ => None,
        }
    }
}

impl Report for FindingIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source {
            location: &self.finding.location,
            source_line: &self.finding.source_line,
        }
    }

    fn message(&self) -> String {
        self.finding.value.clone()
    }

    fn report_severity(&self) -> Severity {
        self.rule.severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule
    }

    fn details(&self) -> Option<String> {
        match &self.finding.kind {
            FindingKind::DeprecatedMacro { suggestion, .. } => Some(suggestion.clone()),
            FindingKind::SpaceAfterComment => {
                Some("comment marker is not followed by a space".to_string())
            }
            FindingKind::TrailingSpaces => Some("line ends with whitespace".to_string()),
            FindingKind::Tab => Some("line contains a tab".to_string()),
            FindingKind::WideLine { length } => {
                Some(format!("line is {} characters long", length))
            }
            FindingKind::StraySemicolonBrace => Some("';}' without a space".to_string()),
            FindingKind::UnencodedExtAscii { character } => Some(format!(
                "'{}' should be written as \\u{:04X}",
                character, *character as u32
            )),
            FindingKind::FontSize { size } => Some(format!(
                "dialog font size {} is outside the standard 8-10 range",
                size
            )),
            FindingKind::FontName => {
                Some("dialog font should be \"MS Shell Dlg\" or \"MS Shell Dlg 2\"".to_string())
            }
        }
    }
}

impl Report for CatalogIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Catalog(&self.location)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        self.rule.severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule
    }

    fn details(&self) -> Option<String> {
        Some(self.explanation.clone())
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.location()
            .location()
            .cmp(other.location().location())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use crate::core::data::{FindingKind, SourceLocation, StringRecord, UsageInfo};
    use crate::issues::*;

    fn record(text: &str, line: usize) -> StringRecord {
        StringRecord::new(
            text,
            UsageInfo::function("MessageBox"),
            SourceLocation::new("./src/app.cpp", line, 12),
            format!("MessageBox(\"{}\");", text),
        )
    }

    #[test]
    fn test_not_available_issue() {
        let issue = NotAvailableIssue {
            record: record("Could not open the file", 10),
        };

        assert_eq!(NotAvailableIssue::severity(), Severity::Error);
        assert_eq!(NotAvailableIssue::rule(), Rule::NotL10nAvailable);
        assert_eq!(issue.message(), "Could not open the file");
        assert_eq!(
            issue.details().as_deref(),
            Some("used by function 'MessageBox', not exposed for translation")
        );
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(SuspectStringIssue::severity(), Severity::Error);
        assert_eq!(SuspectUsageIssue::severity(), Severity::Error);
        assert_eq!(Rule::PrintfMismatch.severity(), Severity::Error);
        assert_eq!(Rule::AcceleratorMismatch.severity(), Severity::Error);
        assert_eq!(Rule::L10nContainsUrl.severity(), Severity::Warning);
        assert_eq!(Rule::Fonts.severity(), Severity::Warning);
        assert_eq!(Rule::WideLine.severity(), Severity::Warning);
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::NotL10nAvailable.to_string(), "not-l10n-available");
        assert_eq!(
            Rule::L10nHasSurroundingSpaces.to_string(),
            "l10n-has-surrounding-spaces"
        );
        assert_eq!(Rule::StraySemicolonBrace.to_string(), "stray-semicolon-brace");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_finding_details() {
        let issue = FindingIssue {
            rule: Rule::UnencodedExtAscii,
            finding: Finding::new(
                FindingKind::UnencodedExtAscii { character: 'é' },
                SourceLocation::new("a.cpp", 1, 5),
                "Café",
                "_(\"Café\");",
            ),
        };
        assert_eq!(issue.details().as_deref(), Some("'é' should be written as \\u00E9"));
        assert_eq!(issue.report_severity(), Severity::Warning);
    }

    #[test]
    fn test_issue_ordering() {
        let later = Issue::NotAvailable(NotAvailableIssue {
            record: record("Second message here", 20),
        });
        let earlier = Issue::SuspectString(SuspectStringIssue {
            record: record("image.bmp", 3),
        });
        let catalog = Issue::Catalog(CatalogIssue {
            rule: Rule::PrintfMismatch,
            location: SourceLocation::new("./po/fr.po", 4, 1),
            source: "%d files".to_string(),
            explanation: "placeholders differ".to_string(),
        });

        let mut issues = vec![later.clone(), catalog.clone(), earlier.clone()];
        issues.sort();
        assert_eq!(issues, vec![catalog, earlier, later]);
    }
}
