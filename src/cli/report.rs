//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo style. Kept apart from the engine so the
//! library can be used without any terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::CommandResult;
use crate::core::ReviewStats;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(stats: &ReviewStats) {
    print_success_to(stats, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(stats: &ReviewStats, writer: &mut W) {
    let files = stats.reviewed_files();
    let mut msg = format!("Checked {} {}", files, plural(files, "file", "files"));

    if !stats.files_by_kind.is_empty() {
        let kinds: Vec<String> = stats
            .files_by_kind
            .iter()
            .map(|(kind, count)| format!("{} {}", count, kind.label()))
            .collect();
        msg.push_str(&format!(" ({})", kinds.join(", ")));
    }
    let strings = stats.strings();
    msg.push_str(&format!(
        ", {} {}",
        strings,
        plural(strings, "string", "strings")
    ));
    if stats.catalog_entries > 0 {
        msg.push_str(&format!(
            ", {} catalog {}",
            stats.catalog_entries,
            plural(stats.catalog_entries, "entry", "entries")
        ));
    }
    msg.push_str(" - no issues found");

    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about files that could not be read.
pub fn print_unreadable_warning(count: usize, verbose: bool) {
    print_unreadable_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print an unreadable-file warning to a custom writer.
pub fn print_unreadable_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    report(&result.issues);

    if result.issues.is_empty() {
        print_success(&result.stats);
    }

    print_unreadable_warning(result.stats.unreadable_files, verbose);
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let report_location = issue.location();
    let location = report_location.location();

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        escape_message(&issue.message()),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        location.file_path,
        location.line,
        location.col
    );

    if let ReportLocation::Source { source_line, .. } = report_location
        && !source_line.trim().is_empty()
    {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            location.line.to_string().blue(),
            "|".blue(),
            source_line.trim(),
            width = max_line_width
        );

        let caret_padding = caret_padding(source_line, location.col);
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

/// Display width before the caret. The excerpt is shown without its
/// indentation; a column inside the indentation or past the end of the line
/// puts the caret at the start.
fn caret_padding(source_line: &str, col: usize) -> usize {
    let indent = source_line.chars().take_while(|c| c.is_whitespace()).count();
    if col <= indent + 1 || col - 1 > source_line.chars().count() {
        return 0;
    }
    let prefix: String = source_line
        .chars()
        .skip(indent)
        .take(col - 1 - indent)
        .collect();
    UnicodeWidthStr::width(prefix.as_str())
}

/// Keep multi-line strings on the header line.
fn escape_message(message: &str) -> String {
    message
        .replace('\r', "\\r")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            plural(total_problems, "problem", "problems"),
            total_errors,
            plural(total_errors, "error", "errors").red(),
            total_warnings,
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.location().location().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
