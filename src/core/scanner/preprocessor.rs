//! `#` directives.
//!
//! Most directives are blanked whole. Blocks compiled only into debug builds
//! are skipped up to their matching `#else`/`#elif`/`#endif`, and `#define`
//! gets its body scanned: a literal body is owned by the macro name, any
//! other body goes back to the main loop as ordinary code.

use std::sync::LazyLock;

use regex::Regex;

use super::{Dialect, FilePass, Step};
use crate::core::resolver::ResolvedContext;

const DEBUG_SYMBOLS: &[&str] = &["DEBUG", "_DEBUG", "__WXDEBUG__"];

// `#if defined(_DEBUG)`, `#if DEBUG`, `#elif !defined(NDEBUG)`
static DEBUG_CONDITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:defined\s*\(?\s*(?:DEBUG|_DEBUG|__WXDEBUG__)\s*\)?|(?:DEBUG|_DEBUG|__WXDEBUG__)|!\s*defined\s*\(?\s*NDEBUG\s*\)?)$",
    )
    .unwrap()
});

pub(super) fn directive<D: Dialect + ?Sized>(pass: &mut FilePass<'_, D>, pos: usize) -> Step {
    let word_start = pass.skip_inline_space(pos + 1);
    let word_end = pass.word_end(word_start);
    let word = pass.text(word_start, word_end);
    let end = pass.directive_end(pos);

    if is_debug_condition(pass, &word, word_end, end) {
        tracing::trace!(directive = %word, "skipping debug-only block");
        return Ok(skip_debug_block(pass, pos, end));
    }

    if word == "define" {
        return define(pass, pos, word_end, end);
    }

    pass.blank(pos, end);
    Ok(end)
}

fn is_debug_condition<D: Dialect + ?Sized>(
    pass: &FilePass<'_, D>,
    word: &str,
    word_end: usize,
    end: usize,
) -> bool {
    let condition = pass.text(word_end, end);
    let condition = strip_trailing_comment(&condition);
    match word {
        "ifdef" => DEBUG_SYMBOLS.contains(&condition),
        "ifndef" => condition == "NDEBUG",
        "if" | "elif" => DEBUG_CONDITION_REGEX.is_match(condition),
        _ => false,
    }
}

fn strip_trailing_comment(condition: &str) -> &str {
    let cut = [condition.find("//"), condition.find("/*")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(condition.len());
    condition[..cut].trim()
}

/// Blank from the opening directive to the `#else`, `#elif` or `#endif`
/// closing it, and resume at that closing directive. Nested conditionals
/// are stepped over.
fn skip_debug_block<D: Dialect + ?Sized>(
    pass: &mut FilePass<'_, D>,
    pos: usize,
    opening_end: usize,
) -> usize {
    let mut depth = 0usize;
    let mut line = opening_end;
    while line < pass.buf.len() {
        let line_start = line + 1;
        let hash = pass.skip_inline_space(line_start);
        if pass.buf.get(hash) == Some(&'#') {
            let word_start = pass.skip_inline_space(hash + 1);
            let word = pass.text(word_start, pass.word_end(word_start));
            match word.as_str() {
                "if" | "ifdef" | "ifndef" => depth += 1,
                "endif" if depth > 0 => depth -= 1,
                "else" | "elif" | "endif" if depth == 0 => {
                    pass.blank(pos, line_start);
                    return line_start;
                }
                _ => {}
            }
        }
        line = pass.line_end(line_start);
    }
    pass.blank(pos, pass.buf.len());
    pass.buf.len()
}

fn define<D: Dialect + ?Sized>(
    pass: &mut FilePass<'_, D>,
    pos: usize,
    keyword_end: usize,
    end: usize,
) -> Step {
    let name_start = pass.skip_inline_space(keyword_end);
    let name_end = pass.word_end(name_start);
    if name_end == name_start {
        pass.blank(pos, end);
        return Ok(end);
    }
    let name = pass.text(name_start, name_end);

    // `#define NAME(args) body`: the body is code
    if pass.buf.get(name_end) == Some(&'(') {
        let header_end = pass.buf[name_end..end]
            .iter()
            .position(|c| *c == ')')
            .map(|i| name_end + i + 1)
            .unwrap_or(end);
        pass.blank(pos, header_end);
        return Ok(header_end);
    }

    let body = pass.skip_inline_space(name_end);
    if let Some(quote) = pass.literal_quote_at(body) {
        pass.blank(pos, body);
        let after = pass.string_literal(quote, Some(ResolvedContext::variable(name, "")))?;
        // whatever follows the literal on the directive line is not code
        let end = pass.directive_end(after.min(pass.buf.len()));
        pass.blank(after, end);
        return Ok(end);
    }

    // an object-like macro expands to code as well
    pass.blank(pos, name_end);
    Ok(name_end)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::{CppScanner, ScanOptions, ScanResults};
    use crate::core::data::UsageInfo;
    use crate::core::heuristics::Heuristics;

    fn scan(source: &str) -> ScanResults {
        let mut scanner = CppScanner::new(Arc::new(Heuristics::default()), ScanOptions::default());
        scanner.scan(source, "defs.h");
        scanner.take_results()
    }

    #[test]
    fn test_strip_trailing_comment() {
        assert_eq!(super::strip_trailing_comment(" _DEBUG // debug only"), "_DEBUG");
        assert_eq!(super::strip_trailing_comment(" defined(DEBUG) /* x */"), "defined(DEBUG)");
        assert_eq!(super::strip_trailing_comment(" NDEBUG"), "NDEBUG");
    }

    #[test]
    fn test_debug_conditions() {
        let source = "#if defined(_DEBUG) // trace builds\n\
                      ShowError(\"First debug message\");\n\
                      #endif\n\
                      #ifndef NDEBUG\n\
                      ShowError(\"Second debug message\");\n\
                      #endif\n\
                      #if DEBUG_LEVEL > 2\n\
                      ShowError(\"Shown in a release build\");\n\
                      #endif\n";
        let results = scan(source);
        let texts: Vec<_> = results.not_available.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Shown in a release build"]);
    }

    #[test]
    fn test_unclosed_debug_block_runs_to_the_end() {
        let results = scan("#ifdef DEBUG\nShowError(\"Never closed block\");\n");
        assert_eq!(results.string_count(), 0);
        assert!(results.diagnostics.is_empty());
    }

    #[test]
    fn test_define_variants() {
        let source = "#define APP_NAME L\"Sample Application Suite\"\n\
                      #define GREETING ShowError(\"Welcome to the program\")\n\
                      #define EMPTY\n";
        let results = scan(source);
        let usages: Vec<_> = results.not_available.iter().map(|r| r.usage.clone()).collect();
        assert_eq!(
            usages,
            vec![
                UsageInfo::variable("APP_NAME", ""),
                UsageInfo::function("ShowError"),
            ]
        );
    }
}
