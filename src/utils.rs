//! Common utility functions shared across the codebase.
//!
//! These are the lexical primitives every scanner leans on: character
//! classes, escape handling, and line/column lookup over a char buffer.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use i18n_review::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("你好"));
/// assert!(contains_alphabetic("Hello123"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Characters that may appear inside a C/C#-style identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters that may appear inside a (possibly qualified) function or
/// variable name as recovered by the context resolver: `std::vector`,
/// `this->name`, `obj.Method`.
pub fn is_qualified_name_char(c: char) -> bool {
    is_identifier_char(c) || matches!(c, ':' | '.' | '>' | '-' | '~')
}

/// Whitespace as far as the scanners are concerned (includes a stray BOM).
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Returns true if the character at `pos` is escaped, i.e. preceded by an
/// odd number of consecutive backslashes.
pub fn is_escaped(buf: &[char], pos: usize) -> bool {
    let mut backslashes = 0;
    let mut i = pos;
    while i > 0 && buf[i - 1] == '\\' {
        backslashes += 1;
        i -= 1;
    }
    backslashes % 2 == 1
}

/// Decodes `\uXXXX`, `\UXXXXXXXX` and `\xHH` escapes into the characters they
/// denote. Every other escape (`\n`, `\t`, `\"`, ...) is left untouched.
pub fn decode_unicode_escapes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() && !is_escaped(&chars, i) {
            let digits = match chars[i + 1] {
                'u' => 4,
                'U' => 8,
                'x' => 2,
                _ => 0,
            };
            if digits > 0 && i + 2 + digits <= chars.len() {
                let hex: String = chars[i + 2..i + 2 + digits].iter().collect();
                if let Some(decoded) = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                {
                    out.push(decoded);
                    i += 2 + digits;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Pre-computed line starts for a char buffer, for O(log n) line lookups.
///
/// Offsets are char indices, so a buffer whose processed spans are blanked
/// out in place (same length, newlines kept) maps to the same positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(buf: &[char]) -> Self {
        let mut starts = vec![0];
        for (i, c) in buf.iter().enumerate() {
            if *c == '\n' {
                starts.push(i + 1);
            }
        }
        Self { starts }
    }

    /// 1-based line and column of a char offset.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let line = match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        (line + 1, offset - self.starts[line] + 1)
    }

    /// Char range `[start, end)` of a 1-based line, excluding the newline.
    pub fn line_span(&self, line: usize, buf_len: usize) -> (usize, usize) {
        let start = self.starts[line - 1];
        let end = self
            .starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(buf_len);
        (start, end)
    }
}
