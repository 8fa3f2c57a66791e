//! Forward-scanning state machine over C-family and C#-like source.
//!
//! The scanner owns a mutable copy of the file as chars. Every span it
//! finishes with (comments, directives, assembly, literals) is blanked in
//! place, newlines kept, so positions never shift and a later backward walk
//! of the context resolver never sees already-consumed text.
//!
//! ## Module Structure
//!
//! - `dialect`: per-language raw strings and name decoration
//! - `preprocessor`: `#` directives and debug-only blocks
//! - `results`: the result buckets and the finalize pass

pub mod dialect;
mod preprocessor;
pub mod results;

use std::sync::{Arc, LazyLock};

use regex::Regex;

pub use dialect::{CSharpDialect, CppDialect, Dialect, RawScan};
pub use results::ScanResults;

use super::data::{DiagnosticMessage, Finding, FindingKind, SourceLocation, StringRecord};
use super::heuristics::Heuristics;
use super::resolver::{ResolvedContext, read_var_or_function_name};
use super::review_style::ReviewStyle;
use crate::utils::{LineIndex, is_escaped, is_identifier_char};

pub type CppScanner = SourceScanner<CppDialect>;
pub type CSharpScanner = SourceScanner<CSharpDialect>;

pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;

// `"%" PRIu64 " bytes"`
static INTEGER_FORMAT_MACRO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PRI([diouxX])(?:8|16|32|64|MAX|PTR|LEAST(?:8|16|32|64)|FAST(?:8|16|32|64))$")
        .unwrap()
});

const ASM_KEYWORDS: &[&str] = &["asm", "__asm", "__asm__"];
const ASM_QUALIFIERS: &[&str] = &["volatile", "__volatile__", "goto", "inline"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub style: ReviewStyle,
    pub max_line_length: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            style: ReviewStyle::default(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Scans source buffers of one dialect and accumulates results across them.
pub struct SourceScanner<D: Dialect> {
    heuristics: Arc<Heuristics>,
    dialect: D,
    options: ScanOptions,
    results: ScanResults,
}

impl<D: Dialect + Default> SourceScanner<D> {
    pub fn new(heuristics: Arc<Heuristics>, options: ScanOptions) -> Self {
        Self::with_dialect(heuristics, D::default(), options)
    }
}

impl<D: Dialect> SourceScanner<D> {
    pub fn with_dialect(heuristics: Arc<Heuristics>, dialect: D, options: ScanOptions) -> Self {
        Self {
            heuristics,
            dialect,
            options,
            results: ScanResults::default(),
        }
    }

    /// Scan one buffer. Never fails: structural anomalies stop the buffer
    /// early and are recorded as diagnostics.
    pub fn scan(&mut self, text: &str, file_path: &str) {
        tracing::debug!(file = file_path, dialect = self.dialect.name(), "scanning source");
        let mut pass = FilePass::new(
            &self.heuristics,
            &self.dialect,
            self.options,
            &mut self.results,
            text,
            file_path,
        );
        pass.run();
    }

    pub fn results(&self) -> &ScanResults {
        &self.results
    }

    pub fn take_results(&mut self) -> ScanResults {
        std::mem::take(&mut self.results)
    }

    /// Drop accumulated results; the heuristic tables are kept.
    pub fn clear_results(&mut self) {
        self.results.clear();
    }
}

/// The scan stopped at a structural anomaly.
struct Halt;

/// Next position to scan from.
type Step = Result<usize, Halt>;

/// State of one buffer walk.
struct FilePass<'a, D: Dialect + ?Sized> {
    heuristics: &'a Heuristics,
    dialect: &'a D,
    options: ScanOptions,
    results: &'a mut ScanResults,
    file_path: &'a str,
    buf: Vec<char>,
    original: Vec<char>,
    lines: LineIndex,
    last_tab_line: usize,
}

impl<'a, D: Dialect + ?Sized> FilePass<'a, D> {
    fn new(
        heuristics: &'a Heuristics,
        dialect: &'a D,
        options: ScanOptions,
        results: &'a mut ScanResults,
        text: &str,
        file_path: &'a str,
    ) -> Self {
        let buf: Vec<char> = text.chars().collect();
        let lines = LineIndex::new(&buf);
        Self {
            heuristics,
            dialect,
            options,
            results,
            file_path,
            original: buf.clone(),
            buf,
            lines,
            last_tab_line: 0,
        }
    }

    fn run(&mut self) {
        let mut pos = 0;
        while pos < self.buf.len() {
            match self.step(pos) {
                Ok(next) => pos = next.max(pos + 1),
                Err(Halt) => break,
            }
        }
        self.check_wide_lines();
    }

    fn step(&mut self, pos: usize) -> Step {
        let c = self.buf[pos];
        let next = self.buf.get(pos + 1).copied();
        match c {
            '/' if next == Some('/') => Ok(self.line_comment(pos)),
            '/' if next == Some('*') => self.block_comment(pos),
            '#' if self.at_line_start(pos) => preprocessor::directive(self, pos),
            '"' => self.string_literal(pos, None),
            '\'' => Ok(self.char_literal(pos)),
            ';' => {
                if next == Some('}') {
                    self.finding(FindingKind::StraySemicolonBrace, pos, None);
                }
                Ok(pos + 1)
            }
            '\t' => {
                self.tab(pos);
                Ok(pos + 1)
            }
            '\n' => {
                self.trailing_spaces(pos);
                Ok(pos + 1)
            }
            'a' | '_' if self.dialect.has_inline_asm() && self.at_word_start(pos) => {
                self.inline_asm(pos)
            }
            _ => Ok(pos + 1),
        }
    }

    // ---- positions -------------------------------------------------------

    fn location(&self, pos: usize) -> SourceLocation {
        let (line, col) = self.lines.position(pos);
        SourceLocation::new(self.file_path, line, col)
    }

    /// Original (unblanked) text of a 1-based line.
    fn source_line(&self, line: usize) -> String {
        let (start, end) = self.lines.line_span(line, self.original.len());
        self.original[start..end]
            .iter()
            .collect::<String>()
            .trim_end_matches('\r')
            .to_string()
    }

    fn at_line_start(&self, pos: usize) -> bool {
        let mut i = pos;
        while i > 0 && matches!(self.buf[i - 1], ' ' | '\t') {
            i -= 1;
        }
        i == 0 || self.buf[i - 1] == '\n'
    }

    fn at_word_start(&self, pos: usize) -> bool {
        pos == 0 || !is_identifier_char(self.buf[pos - 1])
    }

    fn line_end(&self, pos: usize) -> usize {
        self.buf[pos.min(self.buf.len())..]
            .iter()
            .position(|c| *c == '\n')
            .map(|i| pos + i)
            .unwrap_or(self.buf.len())
    }

    /// End of a directive line, following `\` continuations.
    fn directive_end(&self, pos: usize) -> usize {
        let mut end = self.line_end(pos);
        while end < self.buf.len() {
            let mut last = end;
            if last > 0 && self.buf[last - 1] == '\r' {
                last -= 1;
            }
            if last > 0 && self.buf[last - 1] == '\\' {
                end = self.line_end(end + 1);
            } else {
                break;
            }
        }
        end
    }

    fn skip_whitespace(&self, mut pos: usize) -> usize {
        while pos < self.buf.len() && self.buf[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }

    fn skip_inline_space(&self, mut pos: usize) -> usize {
        while pos < self.buf.len() && matches!(self.buf[pos], ' ' | '\t') {
            pos += 1;
        }
        pos
    }

    fn word_end(&self, mut pos: usize) -> usize {
        while pos < self.buf.len() && is_identifier_char(self.buf[pos]) {
            pos += 1;
        }
        pos
    }

    fn text(&self, start: usize, end: usize) -> String {
        self.buf[start..end].iter().collect()
    }

    /// Replace `[start, end)` with spaces, keeping newlines.
    fn blank(&mut self, start: usize, end: usize) {
        let end = end.min(self.buf.len());
        for c in &mut self.buf[start.min(end)..end] {
            if *c != '\n' && *c != '\r' {
                *c = ' ';
            }
        }
    }

    // ---- recording -------------------------------------------------------

    fn diagnose(&mut self, pos: usize, subject: &str, message: &str) {
        let (line, col) = self.lines.position(pos);
        self.results.diagnostics.push(DiagnosticMessage::new(
            self.file_path,
            line,
            col,
            subject,
            message,
        ));
    }

    /// Record a finding at `pos`; `value` defaults to the source line.
    fn finding(&mut self, kind: FindingKind, pos: usize, value: Option<String>) {
        let style = self.options.style;
        let enabled = match kind {
            FindingKind::DeprecatedMacro { .. } => style.contains(ReviewStyle::DEPRECATED_MACRO),
            FindingKind::SpaceAfterComment => style.contains(ReviewStyle::SPACE_AFTER_COMMENT),
            FindingKind::TrailingSpaces => style.contains(ReviewStyle::TRAILING_SPACES),
            FindingKind::Tab => style.contains(ReviewStyle::TABS),
            FindingKind::WideLine { .. } => style.contains(ReviewStyle::WIDE_LINE),
            FindingKind::StraySemicolonBrace => {
                style.contains(ReviewStyle::STRAY_SEMICOLON_BRACE)
            }
            FindingKind::UnencodedExtAscii { .. } => {
                style.contains(ReviewStyle::UNENCODED_EXT_ASCII)
            }
            FindingKind::FontSize { .. } | FindingKind::FontName => {
                style.contains(ReviewStyle::FONTS)
            }
        };
        if !enabled {
            return;
        }
        let location = self.location(pos);
        let source_line = self.source_line(location.line);
        let value = value.unwrap_or_else(|| source_line.trim_start().to_string());
        self.results
            .findings
            .push(Finding::new(kind, location, value, source_line));
    }

    fn record(&mut self, text: String, context: ResolvedContext, start: usize) {
        let heuristics = self.heuristics;
        let style = self.options.style;

        if let Some(name) = &context.deprecated_macro
            && let Some(deprecated) = heuristics.deprecated_macro(name)
        {
            let kind = FindingKind::DeprecatedMacro {
                name: name.clone(),
                suggestion: deprecated.suggestion.clone(),
            };
            self.finding(kind, start, Some(name.clone()));
        }
        if self.dialect.flags_unencoded_ext_ascii()
            && let Some(character) = text.chars().find(|c| !c.is_ascii())
        {
            self.finding(
                FindingKind::UnencodedExtAscii { character },
                start,
                Some(text.clone()),
            );
        }

        if heuristics.is_non_translatable_function(&context.function) {
            return;
        }

        let location = self.location(start);
        let source_line = self.source_line(location.line);
        let record = StringRecord::new(text, context.usage(), location, source_line);

        if heuristics.is_i18n_function(&context.function) {
            if style.contains(ReviewStyle::SUSPECT_L10N_USAGE)
                && let Some(outer_position) = context.outer_position
            {
                let outer =
                    read_var_or_function_name(heuristics, self.dialect, &self.buf, outer_position);
                if heuristics.is_internal_call(&outer.function) {
                    self.results.localizable_in_internal_call.push(record.clone());
                }
            }
            self.results.localizable.push(record);
            return;
        }

        let internal_context = heuristics.is_internal_call(&context.function)
            || heuristics.is_variable_type_to_ignore(&context.variable_type)
            || (!context.variable.is_empty()
                && heuristics.is_ignored_variable_name(&context.variable));

        if internal_context || heuristics.is_untranslatable_string(&record.text, true) {
            self.results.internal.push(record);
        } else if style.contains(ReviewStyle::NOT_L10N_AVAILABLE) {
            self.results.not_available.push(record);
        }
    }

    // ---- states ----------------------------------------------------------

    fn line_comment(&mut self, pos: usize) -> usize {
        let end = self.line_end(pos);
        if let Some(&c) = self.buf.get(pos + 2)
            && !c.is_whitespace()
            && !matches!(c, '/' | '!' | '<')
        {
            self.finding(FindingKind::SpaceAfterComment, pos, None);
        }
        self.blank(pos, end);
        end
    }

    fn block_comment(&mut self, pos: usize) -> Step {
        match find_seq(&self.buf, pos + 2, &['*', '/']) {
            Some(close) => {
                self.blank(pos, close + 2);
                Ok(close + 2)
            }
            None => {
                self.diagnose(pos, "unterminated-comment", "block comment is never closed");
                Err(Halt)
            }
        }
    }

    /// Skip `'x'`; a `'` inside a number is a digit separator.
    fn char_literal(&self, pos: usize) -> usize {
        let mut word = pos;
        while word > 0 && is_identifier_char(self.buf[word - 1]) {
            word -= 1;
        }
        if word < pos && self.buf[word].is_ascii_digit() {
            return pos + 1;
        }
        let mut i = pos + 1;
        while i < self.buf.len() && self.buf[i] != '\n' {
            if self.buf[i] == '\'' && !is_escaped(&self.buf, i) {
                return i + 1;
            }
            i += 1;
        }
        pos + 1
    }

    fn tab(&mut self, pos: usize) {
        let (line, _) = self.lines.position(pos);
        if line != self.last_tab_line {
            self.last_tab_line = line;
            self.finding(FindingKind::Tab, pos, None);
        }
    }

    fn trailing_spaces(&mut self, newline: usize) {
        let mut end = newline;
        if end > 0 && self.original[end - 1] == '\r' {
            end -= 1;
        }
        if end > 0 && matches!(self.original[end - 1], ' ' | '\t') {
            self.finding(FindingKind::TrailingSpaces, end - 1, None);
        }
    }

    fn check_wide_lines(&mut self) {
        if !self.options.style.contains(ReviewStyle::WIDE_LINE) {
            return;
        }
        let raw_marker: String = [self.dialect.raw_marker(), '"'].iter().collect();
        let mut wide = Vec::new();
        let mut start = 0;
        for line in self.original.split(|c| *c == '\n') {
            let line_text: String = line.iter().collect();
            let line_text = line_text.trim_end_matches('\r');
            let length = line_text.chars().count();
            if length > self.options.max_line_length
                && !line_text.contains(&raw_marker)
                && !line_text.contains('|')
            {
                wide.push((start, length));
            }
            start += line.len() + 1;
        }
        for (pos, length) in wide {
            self.finding(FindingKind::WideLine { length }, pos, None);
        }
    }

    fn inline_asm(&mut self, pos: usize) -> Step {
        let word_end = self.word_end(pos);
        if !ASM_KEYWORDS.contains(&self.text(pos, word_end).as_str()) {
            return Ok(word_end);
        }

        let mut body = self.skip_whitespace(word_end);
        loop {
            let qualifier_end = self.word_end(body);
            if qualifier_end > body && ASM_QUALIFIERS.contains(&self.text(body, qualifier_end).as_str())
            {
                body = self.skip_whitespace(qualifier_end);
            } else {
                break;
            }
        }

        let end = match self.buf.get(body) {
            Some('(') => find_matching(&self.buf, body, '(', ')'),
            Some('{') => find_matching(&self.buf, body, '{', '}'),
            _ => Some(self.line_end(word_end)),
        };
        match end {
            Some(end) => {
                self.blank(pos, end);
                Ok(end)
            }
            None => {
                self.diagnose(pos, "unterminated-asm", "inline assembly block is never closed");
                Err(Halt)
            }
        }
    }

    /// Quote of a literal starting at `pos`, prefix included (`L"`, `@"`).
    fn literal_quote_at(&self, pos: usize) -> Option<usize> {
        if self.buf.get(pos) == Some(&'"') {
            return Some(pos);
        }
        (1..=3).find_map(|len| {
            let quote = pos + len;
            (self.buf.get(quote) == Some(&'"') && self.dialect.prefix_len(&self.buf, quote) == len)
                .then_some(quote)
        })
    }

    /// `PRId64`-style macro at `pos`: its conversion letter and end.
    fn integer_format_macro(&self, pos: usize) -> Option<(char, usize)> {
        let end = self.word_end(pos);
        if end == pos {
            return None;
        }
        let word = self.text(pos, end);
        let caps = INTEGER_FORMAT_MACRO_REGEX.captures(&word)?;
        let letter = caps.get(1)?.as_str().chars().next()?;
        Some((letter, end))
    }

    /// Content of the literal whose quote is at `quote`, and the index past it.
    fn read_literal(&mut self, quote: usize) -> Result<(String, usize), Halt> {
        match self.dialect.scan_raw_string(&self.buf, quote) {
            RawScan::Literal { text, end } => return Ok((text, end)),
            RawScan::Unterminated => {
                self.diagnose(quote, "unterminated-raw-string", "raw string is never closed");
                return Err(Halt);
            }
            RawScan::NotRaw => {}
        }

        let mut text = String::new();
        let mut i = quote + 1;
        while i < self.buf.len() {
            let c = self.buf[i];
            if c == '"' && !is_escaped(&self.buf, i) {
                return Ok((text, i + 1));
            }
            if c == '\n' {
                let mut last = i;
                if text.ends_with('\r') {
                    text.pop();
                    last -= 1;
                }
                // backslash-newline continues the literal
                if text.ends_with('\\') && is_escaped(&self.buf, last) {
                    text.pop();
                    i += 1;
                    continue;
                }
                break;
            }
            text.push(c);
            i += 1;
        }
        self.diagnose(quote, "unterminated-string", "string literal is never closed");
        Err(Halt)
    }

    /// Process the literal at `quote`, joining adjacent literals, then
    /// classify it and blank it out. `forced` bypasses context resolution.
    fn string_literal(&mut self, quote: usize, forced: Option<ResolvedContext>) -> Step {
        if is_escaped(&self.buf, quote) {
            return Ok(quote + 1);
        }
        let start = quote - self.dialect.prefix_len(&self.buf, quote);
        let (mut text, mut end) = self.read_literal(quote)?;

        loop {
            let mut next = self.skip_whitespace(end);
            let joiner = self.integer_format_macro(next);
            if let Some((letter, after)) = joiner {
                text.push(letter);
                end = after;
                next = self.skip_whitespace(after);
            }
            let Some(next_quote) = self.literal_quote_at(next) else {
                break;
            };
            let (more, more_end) = self.read_literal(next_quote)?;
            text.push_str(&more);
            end = more_end;
        }

        let context = match forced {
            Some(context) => context,
            None => read_var_or_function_name(self.heuristics, self.dialect, &self.buf, start),
        };
        tracing::trace!(text = %text, usage = %context.usage(), "string literal");
        self.record(text, context, start);
        self.blank(start, end);
        Ok(end)
    }
}

fn find_seq(buf: &[char], from: usize, needle: &[char]) -> Option<usize> {
    if from >= buf.len() {
        return None;
    }
    buf[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| from + i)
}

/// Index just past the `close` matching the `open` at `start`.
fn find_matching(buf: &[char], start: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in buf.iter().enumerate().skip(start) {
        if *c == open {
            depth += 1;
        } else if *c == close {
            depth -= 1;
            if depth == 0 {
                return Some(i + 1);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::data::UsageInfo;

    fn scan_cpp(source: &str) -> ScanResults {
        scan_cpp_with(source, ScanOptions::default())
    }

    fn scan_cpp_with(source: &str, options: ScanOptions) -> ScanResults {
        let mut scanner = CppScanner::new(Arc::new(Heuristics::default()), options);
        scanner.scan(source, "test.cpp");
        scanner.take_results()
    }

    fn texts(records: &[StringRecord]) -> Vec<&str> {
        records.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_function_context() {
        let results = scan_cpp(r#"MessageBox("Failed adding book helpfiles/another.hhp");"#);
        assert_eq!(results.not_available.len(), 1);
        let record = &results.not_available[0];
        assert_eq!(record.text, "Failed adding book helpfiles/another.hhp");
        assert_eq!(record.usage, UsageInfo::function("MessageBox"));
        assert_eq!((record.line(), record.col()), (1, 12));
    }

    #[test]
    fn test_define_is_a_variable() {
        let results = scan_cpp("#define REV_TIME \"unknown date and time\"\n");
        assert_eq!(texts(&results.not_available), vec!["unknown date and time"]);
        assert_eq!(
            results.not_available[0].usage,
            UsageInfo::variable("REV_TIME", "")
        );
    }

    #[test]
    fn test_comparison_is_orphan() {
        let results = scan_cpp("if (value == \"my message\")\n    return;\n");
        assert_eq!(results.not_available.len(), 1);
        assert_eq!(results.not_available[0].usage, UsageInfo::Orphan);
    }

    #[test]
    fn test_adjacent_literals_are_joined() {
        let source = "wxMessageBox(\"This is a long \"\n    \"message across \"\n    \"multiple lines\");\n";
        let results = scan_cpp(source);
        assert_eq!(
            texts(&results.not_available),
            vec!["This is a long message across multiple lines"]
        );
        assert_eq!(results.not_available[0].line(), 1);
    }

    #[test]
    fn test_integer_format_macro_is_joined() {
        let results = scan_cpp(r#"printf("Copied %" PRIu64 " of the files", count);"#);
        assert_eq!(
            texts(&results.not_available),
            vec!["Copied %u of the files"]
        );
    }

    #[test]
    fn test_deprecated_macro_is_looked_through() {
        let results = scan_cpp(r#"SetLabel(_T("Open the selected file"));"#);
        assert_eq!(results.not_available.len(), 1);
        assert_eq!(results.not_available[0].usage, UsageInfo::function("SetLabel"));
        assert_eq!(results.findings.len(), 1);
        assert_eq!(
            results.findings[0].kind,
            FindingKind::DeprecatedMacro {
                name: "_T".to_string(),
                suggestion: "_T() macro can be removed. Prefix with 'L' to make it a wide string."
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_translation_calls() {
        let results = scan_cpp(
            "SetLabel(_(\"Open the selected file\"));\n\
             wxLogDebug(_(\"Internal trace message\"));\n\
             DrawText(_DT(\"Do not translate me\"));\n",
        );
        assert_eq!(
            texts(&results.localizable),
            vec!["Open the selected file", "Internal trace message"]
        );
        assert_eq!(
            texts(&results.localizable_in_internal_call),
            vec!["Internal trace message"]
        );
        assert!(results.not_available.is_empty());
        assert!(results.internal.is_empty());
    }

    #[test]
    fn test_internal_contexts() {
        let results = scan_cpp(
            "assert(ptr != nullptr && \"The pointer must be valid\");\n\
             wxColour background(\"light steel blue\");\n\
             const char* sqlQuery = \"SELECT name FROM users\";\n\
             std::string errorMessage = \"Unable to open the file\";\n",
        );
        assert_eq!(results.internal.len(), 3);
        assert_eq!(texts(&results.not_available), vec!["Unable to open the file"]);
    }

    #[test]
    fn test_comments_and_directives_are_skipped() {
        let results = scan_cpp(
            "#include \"some header.h\"\n\
             // MessageBox(\"In a line comment\");\n\
             /* MessageBox(\"In a block comment\"); */\n\
             #pragma message(\"Building the project\")\n\
             MessageBox(\"After all the comments\");\n",
        );
        assert_eq!(texts(&results.not_available), vec!["After all the comments"]);
        assert_eq!(results.not_available[0].line(), 5);
    }

    #[test]
    fn test_debug_blocks_are_skipped() {
        let results = scan_cpp(
            "#ifdef _DEBUG\n\
             MessageBox(\"Debug build message\");\n\
             #if HAVE_X\n\
             MessageBox(\"Nested debug message\");\n\
             #endif\n\
             #else\n\
             MessageBox(\"Release build message\");\n\
             #endif\n\
             #if !defined(NDEBUG)\n\
             MessageBox(\"Also only in debug\");\n\
             #endif\n",
        );
        assert_eq!(texts(&results.not_available), vec!["Release build message"]);
    }

    #[test]
    fn test_function_like_define_body_is_scanned() {
        let results = scan_cpp("#define SHOW_ERROR(x) MessageBox(\"Something went wrong\", x)\n");
        assert_eq!(texts(&results.not_available), vec!["Something went wrong"]);
        assert_eq!(results.not_available[0].usage, UsageInfo::function("MessageBox"));
    }

    #[test]
    fn test_inline_asm_is_skipped() {
        let results = scan_cpp(
            "__asm__ volatile (\"mov %0, %1\" : \"=r\"(x) : \"r\"(y));\n\
             __asm {\n    mov eax, \"not a string\"\n}\n\
             MessageBox(\"After the assembly\");\n",
        );
        assert_eq!(texts(&results.not_available), vec!["After the assembly"]);
        assert!(results.internal.is_empty());
    }

    #[test]
    fn test_raw_and_prefixed_strings() {
        let results = scan_cpp(
            "SetText(R\"(Raw \"quoted\" text here)\");\n\
             SetText(L\"Wide text here\");\n\
             SetText(\"Escaped \\\"quote\\\" text\");\n\
             char c = '\"';\n",
        );
        assert_eq!(
            texts(&results.not_available),
            vec![
                r#"Raw "quoted" text here"#,
                "Wide text here",
                r#"Escaped \"quote\" text"#
            ]
        );
    }

    #[test]
    fn test_unterminated_comment_keeps_earlier_results() {
        let results = scan_cpp("MessageBox(\"Before the comment\");\n/* never closed\nMessageBox(\"Lost text\");\n");
        assert_eq!(texts(&results.not_available), vec!["Before the comment"]);
        assert_eq!(results.diagnostics.len(), 1);
        assert_eq!(results.diagnostics[0].subject, "unterminated-comment");
        assert_eq!(results.diagnostics[0].line, 2);
    }

    #[test]
    fn test_unterminated_raw_string() {
        let results = scan_cpp("SetText(R\"(never closed);\n");
        assert_eq!(results.diagnostics[0].subject, "unterminated-raw-string");
        assert_eq!(results.string_count(), 0);
    }

    #[test]
    fn test_formatting_findings() {
        let options = ScanOptions {
            style: ReviewStyle::all(),
            max_line_length: 40,
        };
        let source = "int x = 1;  \n\tint y = 2;\n//no space\nvoid f() { g();}\nint a_really_long_variable_name = compute_value(1, 2, 3);\nint mask = FLAG_ONE | FLAG_TWO | FLAG_THREE | FLAG_FOUR;\n";
        let results = scan_cpp_with(source, options);
        let kinds: Vec<_> = results.findings.iter().map(|f| f.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                FindingKind::TrailingSpaces,
                FindingKind::Tab,
                FindingKind::SpaceAfterComment,
                FindingKind::StraySemicolonBrace,
                FindingKind::WideLine { length: 57 },
            ]
        );
        assert_eq!(results.findings[0].value, "int x = 1;  ");
    }

    #[test]
    fn test_formatting_checks_off_by_default() {
        let results = scan_cpp("int x = 1;  \n\tint y = 2;\n//no space\n");
        assert!(results.findings.is_empty());
    }

    #[test]
    fn test_unencoded_ext_ascii() {
        let results = scan_cpp(r#"MessageBox("Café is open today");"#);
        assert_eq!(results.findings.len(), 1);
        assert_eq!(
            results.findings[0].kind,
            FindingKind::UnencodedExtAscii { character: 'é' }
        );
    }

    #[test]
    fn test_clear_results() {
        let mut scanner = CppScanner::new(Arc::new(Heuristics::default()), ScanOptions::default());
        scanner.scan(r#"MessageBox("First file message");"#, "a.cpp");
        scanner.scan(r#"MessageBox("Second file message");"#, "b.cpp");
        assert_eq!(scanner.results().not_available.len(), 2);
        scanner.clear_results();
        assert_eq!(scanner.results().string_count(), 0);
        scanner.scan(r#"MessageBox("Third file message");"#, "c.cpp");
        assert_eq!(scanner.results().not_available.len(), 1);
    }

    #[test]
    fn test_csharp_strings() {
        let mut scanner =
            CSharpScanner::new(Arc::new(Heuristics::default()), ScanOptions::default());
        scanner.scan(
            "MessageBox.Show(@\"Verbatim \"\"quoted\"\" text\");\n\
             Debug.WriteLine(\"Value changed here\");\n\
             var greeting = $\"Hello {name}, welcome back\";\n\
             var raw = \"\"\"Raw string with \"quotes\" inside\"\"\";\n\
             #region Helpers\n\
             #endregion\n",
            "Form.cs",
        );
        let results = scanner.take_results();
        assert_eq!(
            texts(&results.not_available),
            vec![
                r#"Verbatim "quoted" text"#,
                "Hello {name}, welcome back",
                r#"Raw string with "quotes" inside"#
            ]
        );
        assert_eq!(
            results.not_available[0].usage,
            UsageInfo::function("MessageBox.Show")
        );
        assert_eq!(texts(&results.internal), vec!["Value changed here"]);
        assert!(results.findings.is_empty());
    }

    #[test]
    fn test_csharp_fully_qualified_debug_call_is_internal() {
        let mut scanner =
            CSharpScanner::new(Arc::new(Heuristics::default()), ScanOptions::default());
        scanner.scan(
            "System.Diagnostics.Debug.WriteLine(\"Value changed here\");\n\
             Debug.WriteLine(\"Value changed here\");\n",
            "Form.cs",
        );
        let results = scanner.take_results();
        assert!(results.not_available.is_empty());
        assert_eq!(results.internal.len(), 2);
        assert_eq!(
            results.internal[0].usage,
            UsageInfo::function("Diagnostics.Debug.WriteLine")
        );
    }

    #[test]
    fn test_lambda_before_literal_keeps_call_context() {
        let results = scan_cpp("ShowMessage([]() { Refresh(); }, \"Could not open the file\");\n");
        assert_eq!(texts(&results.not_available), vec!["Could not open the file"]);
        assert_eq!(
            results.not_available[0].usage,
            UsageInfo::function("ShowMessage")
        );
    }
}
