//! Windows resource scripts (`.rc`): string tables and dialog fonts.
//!
//! String-table bounds are found with separate searches for the keyword, the
//! opening `BEGIN`/`{` and the closing `END`/`}` instead of one nested
//! pattern, which keeps large scripts linear.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::data::{
    DiagnosticMessage, Finding, FindingKind, SourceLocation, StringRecord, UsageInfo,
};
use super::heuristics::Heuristics;
use super::review_style::ReviewStyle;
use super::scanner::ScanResults;

const STANDARD_DIALOG_FONTS: &[&str] = &["MS Shell Dlg", "MS Shell Dlg 2"];
const STANDARD_FONT_SIZES: std::ops::RangeInclusive<u32> = 8..=10;

static STRINGTABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bSTRINGTABLE\b").unwrap());

static BLOCK_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bBEGIN\b|\{").unwrap());

// `IDS_NAME "text"` or `IDS_NAME, "text"`, with `""` as an escaped quote
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_]*|[0-9]+)\s*,?\s*"((?:[^"]|"")*)""#).unwrap()
});

static FONT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bFONT\s+(\d+)\s*,\s*"([^"]*)""#).unwrap());

/// Scans resource scripts and accumulates results across them.
pub struct ResourceScanner {
    heuristics: Arc<Heuristics>,
    style: ReviewStyle,
    results: ScanResults,
}

impl ResourceScanner {
    pub fn new(heuristics: Arc<Heuristics>, style: ReviewStyle) -> Self {
        Self {
            heuristics,
            style,
            results: ScanResults::default(),
        }
    }

    pub fn scan(&mut self, text: &str, file_path: &str) {
        tracing::debug!(file = file_path, "scanning resource script");
        self.scan_string_tables(text, file_path);
        if self.style.contains(ReviewStyle::FONTS) {
            self.scan_fonts(text, file_path);
        }
    }

    pub fn results(&self) -> &ScanResults {
        &self.results
    }

    pub fn take_results(&mut self) -> ScanResults {
        std::mem::take(&mut self.results)
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// The heuristic tables this scanner was built with.
    pub fn heuristics(&self) -> &Heuristics {
        &self.heuristics
    }

    fn scan_string_tables(&mut self, text: &str, file_path: &str) {
        let mut from = 0;
        while let Some(keyword) = STRINGTABLE_REGEX.find_at(text, from) {
            let Some(open) = BLOCK_OPEN_REGEX.find_at(text, keyword.end()) else {
                break;
            };
            let Some(close) = block_end(text, open.end()) else {
                let (line, col) = line_col(text, keyword.start());
                self.results.diagnostics.push(DiagnosticMessage::new(
                    file_path,
                    line,
                    col,
                    "unterminated-stringtable",
                    "STRINGTABLE block is never closed",
                ));
                return;
            };

            let body = &text[open.end()..close];
            for caps in ENTRY_REGEX.captures_iter(body) {
                let (Some(id), Some(value)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                let offset = open.end() + value.start() - 1;
                let (line, col) = line_col(text, offset);
                self.results.localizable.push(StringRecord::new(
                    value.as_str().replace("\"\"", "\""),
                    UsageInfo::variable(id.as_str(), ""),
                    SourceLocation::new(file_path, line, col),
                    source_line(text, offset),
                ));
            }
            from = close;
        }
    }

    fn scan_fonts(&mut self, text: &str, file_path: &str) {
        for caps in FONT_REGEX.captures_iter(text) {
            let (Some(whole), Some(size), Some(name)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let (line, col) = line_col(text, whole.start());
            let location = SourceLocation::new(file_path, line, col);
            let line_text = source_line(text, whole.start());

            // sizes too large for `u32` are certainly outside the range
            let size = size.as_str().parse::<u32>().unwrap_or(u32::MAX);
            if !STANDARD_FONT_SIZES.contains(&size) {
                self.results.findings.push(Finding::new(
                    FindingKind::FontSize { size },
                    location.clone(),
                    size.to_string(),
                    line_text.clone(),
                ));
            }
            if !STANDARD_DIALOG_FONTS.contains(&name.as_str()) {
                self.results.findings.push(Finding::new(
                    FindingKind::FontName,
                    location,
                    name.as_str(),
                    line_text,
                ));
            }
        }
    }
}

/// Byte offset of the `END`/`}` closing a block opened right before `from`.
/// Quoted text is stepped over.
fn block_end(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == b'"' {
                        if bytes.get(i + 1) == Some(&b'"') {
                            i += 2;
                            continue;
                        }
                        break;
                    }
                    i += 1;
                }
            }
            b'}' => return Some(i),
            b'E' if text[i..].starts_with("END")
                && (i == 0 || !is_word_byte(bytes[i - 1]))
                && !bytes.get(i + 3).copied().is_some_and(is_word_byte) =>
            {
                return Some(i);
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// 1-based line and character column of a byte offset.
fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (line, before[line_start..].chars().count() + 1)
}

fn source_line(text: &str, offset: usize) -> String {
    let start = text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(text.len());
    text[start..end].trim_end_matches('\r').to_string()
}
