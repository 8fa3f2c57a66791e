//! Per-language differences of the source scanner.
//!
//! Everything that differs between C-family and C#-like source lives behind
//! [`Dialect`]: how a raw string starts and ends, how long its delimiter may
//! be, which character marks it, and how a resolved name is decorated. The
//! scanning algorithm itself is shared.

use crate::utils::is_identifier_char;

/// Outcome of probing a quote for a raw/verbatim string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawScan {
    /// An ordinary escaped literal; the shared scanner reads it.
    NotRaw,
    /// Raw literal with its (unescaped) content and the index just past it.
    Literal { text: String, end: usize },
    /// A raw literal that never closes.
    Unterminated,
}

pub trait Dialect: Send + Sync {
    fn name(&self) -> &'static str;

    /// Character that marks a raw string (`R"(...)"`, `@"..."`).
    fn raw_marker(&self) -> char;

    /// Longest raw-string delimiter accepted.
    fn max_delimiter_len(&self) -> usize;

    /// Literal prefixes, longest first.
    fn prefixes(&self) -> &'static [&'static str];

    /// Probe the quote at `quote` for a raw string.
    fn scan_raw_string(&self, buf: &[char], quote: usize) -> RawScan;

    /// Strip accessors and namespaces a resolved name should not carry.
    fn decorate_name(&self, name: &str) -> String;

    /// Whether inline assembly blocks exist in this language.
    fn has_inline_asm(&self) -> bool;

    /// Whether raw non-ASCII characters in literals should be escaped.
    fn flags_unencoded_ext_ascii(&self) -> bool;

    /// Number of prefix characters (`L`, `u8`, `@`, ...) right before `quote`.
    fn prefix_len(&self, buf: &[char], quote: usize) -> usize {
        for prefix in self.prefixes() {
            let len = prefix.chars().count();
            if len > quote {
                continue;
            }
            let start = quote - len;
            let matches = buf[start..quote].iter().copied().eq(prefix.chars());
            let bounded = start == 0 || !is_identifier_char(buf[start - 1]);
            if matches && bounded {
                return len;
            }
        }
        0
    }
}

/// Trailing `&`/`*`, template arguments and whitespace are never part of a name.
fn strip_type_noise(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut depth = 0usize;
    for c in name.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth > 0 => {}
            '&' | '*' => {}
            c if c.is_whitespace() => {}
            c => out.push(c),
        }
    }
    out
}

/// C, C++ and Objective-C style sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppDialect;

impl Dialect for CppDialect {
    fn name(&self) -> &'static str {
        "c-family"
    }

    fn raw_marker(&self) -> char {
        'R'
    }

    fn max_delimiter_len(&self) -> usize {
        16
    }

    fn prefixes(&self) -> &'static [&'static str] {
        &["u8R", "LR", "uR", "UR", "u8", "R", "L", "u", "U"]
    }

    fn scan_raw_string(&self, buf: &[char], quote: usize) -> RawScan {
        let prefix = self.prefix_len(buf, quote);
        if prefix == 0 || buf[quote - 1] != self.raw_marker() {
            return RawScan::NotRaw;
        }

        // R"delim( ... )delim"
        let mut open = quote + 1;
        while open < buf.len() && buf[open] != '(' {
            let c = buf[open];
            if open - quote > self.max_delimiter_len()
                || c.is_whitespace()
                || matches!(c, '\\' | ')' | '"')
            {
                return RawScan::NotRaw;
            }
            open += 1;
        }
        if open >= buf.len() {
            return RawScan::Unterminated;
        }

        let mut terminator = vec![')'];
        terminator.extend_from_slice(&buf[quote + 1..open]);
        terminator.push('"');

        let content_start = open + 1;
        match buf[content_start..]
            .windows(terminator.len())
            .position(|w| w == terminator.as_slice())
        {
            Some(offset) => {
                let content_end = content_start + offset;
                RawScan::Literal {
                    text: buf[content_start..content_end].iter().collect(),
                    end: content_end + terminator.len(),
                }
            }
            None => RawScan::Unterminated,
        }
    }

    fn decorate_name(&self, name: &str) -> String {
        let name = strip_type_noise(name);
        let cut = [
            name.rfind("::").map(|i| i + 2),
            name.rfind("->").map(|i| i + 2),
            name.rfind('.').map(|i| i + 1),
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0);
        name[cut..].to_string()
    }

    fn has_inline_asm(&self) -> bool {
        true
    }

    fn flags_unencoded_ext_ascii(&self) -> bool {
        true
    }
}

/// C# and similar managed sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpDialect;

impl Dialect for CSharpDialect {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn raw_marker(&self) -> char {
        '@'
    }

    fn max_delimiter_len(&self) -> usize {
        // `"""` raw strings may use any run of three or more quotes; the
        // opening run length is the delimiter
        usize::MAX
    }

    fn prefixes(&self) -> &'static [&'static str] {
        &["$$$", "$@", "@$", "$$", "@", "$"]
    }

    fn scan_raw_string(&self, buf: &[char], quote: usize) -> RawScan {
        let run = buf[quote..].iter().take_while(|c| **c == '"').count();
        if run >= 3 && run <= self.max_delimiter_len() {
            let content_start = quote + run;
            let mut i = content_start;
            while i < buf.len() {
                if buf[i] == '"' {
                    let closing = buf[i..].iter().take_while(|c| **c == '"').count();
                    if closing >= run {
                        return RawScan::Literal {
                            text: buf[content_start..i].iter().collect(),
                            end: i + closing,
                        };
                    }
                    i += closing;
                } else {
                    i += 1;
                }
            }
            return RawScan::Unterminated;
        }

        let prefix = self.prefix_len(buf, quote);
        let verbatim = buf[quote - prefix..quote].contains(&self.raw_marker());
        if !verbatim {
            return RawScan::NotRaw;
        }

        // @"...", where "" is an escaped quote
        let mut text = String::new();
        let mut i = quote + 1;
        while i < buf.len() {
            if buf[i] == '"' {
                if buf.get(i + 1) == Some(&'"') {
                    text.push('"');
                    i += 2;
                    continue;
                }
                return RawScan::Literal { text, end: i + 1 };
            }
            text.push(buf[i]);
            i += 1;
        }
        RawScan::Unterminated
    }

    fn decorate_name(&self, name: &str) -> String {
        let mut name = strip_type_noise(name);
        while let Some(rest) = ["this.", "base.", "System."]
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix))
        {
            name = rest.to_string();
        }
        name
    }

    fn has_inline_asm(&self) -> bool {
        false
    }

    fn flags_unencoded_ext_ascii(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_cpp_prefix_len() {
        let d = CppDialect;
        let buf = chars(r#"x = u8"text""#);
        assert_eq!(d.prefix_len(&buf, 6), 2);
        let buf = chars(r#"LR"(x)""#);
        assert_eq!(d.prefix_len(&buf, 2), 2);
        // part of an identifier, not a prefix
        let buf = chars(r#"URL"x""#);
        assert_eq!(d.prefix_len(&buf, 3), 0);
    }

    #[test]
    fn test_cpp_raw_string() {
        let d = CppDialect;
        let buf = chars(r#"R"xy(some "quoted" text)xy" rest"#);
        assert_eq!(
            d.scan_raw_string(&buf, 1),
            RawScan::Literal {
                text: r#"some "quoted" text"#.to_string(),
                end: 27
            }
        );

        let buf = chars(r#""plain""#);
        assert_eq!(d.scan_raw_string(&buf, 0), RawScan::NotRaw);

        let buf = chars(r#"R"(never closed"#);
        assert_eq!(d.scan_raw_string(&buf, 1), RawScan::Unterminated);
    }

    #[test]
    fn test_csharp_verbatim_string() {
        let d = CSharpDialect;
        let buf = chars(r#"@"C:\dir ""x""""#);
        assert_eq!(
            d.scan_raw_string(&buf, 1),
            RawScan::Literal {
                text: r#"C:\dir "x""#.to_string(),
                end: 15
            }
        );
    }

    #[test]
    fn test_csharp_raw_string() {
        let d = CSharpDialect;
        // """He said "hi""" ;
        let buf = chars(r#""""He said "hi""" ;"#);
        assert_eq!(
            d.scan_raw_string(&buf, 0),
            RawScan::Literal {
                text: r#"He said "hi"#.to_string(),
                end: 17
            }
        );
        let buf = chars(r#""""never"#);
        assert_eq!(d.scan_raw_string(&buf, 0), RawScan::Unterminated);
    }

    #[test]
    fn test_decorate_name() {
        assert_eq!(CppDialect.decorate_name("wxString::Format"), "Format");
        assert_eq!(CppDialect.decorate_name("this->SetLabel"), "SetLabel");
        assert_eq!(CppDialect.decorate_name("std::vector<std::string>&"), "vector");
        assert_eq!(CSharpDialect.decorate_name("this.label.Text"), "label.Text");
        assert_eq!(CSharpDialect.decorate_name("Debug.WriteLine"), "Debug.WriteLine");
    }
}
