//! The "is this string internal?" classifier.
//!
//! Rules run in a fixed order and short-circuit on the first verdict. The
//! order matters: the cheap shape checks run first, then the long list of
//! "looks internal" patterns.

use std::sync::LazyLock;

use regex::Regex;

use super::heuristics::Heuristics;
use super::printf::leading_printf_run_len;
use crate::utils::decode_unicode_escapes;

static ESCAPED_WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[nrt]").unwrap());

// `name(args)` or a dangling `name(`
static FUNCTION_SIGNATURE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_~][\w:.\->]*\((?:[^()]*\))?;?$").unwrap());

// `Item(s)`, `file(es)`
static PLURAL_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\w+\((?:s|es|ies)\)$").unwrap());

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").unwrap());

static CONTROL_NOISE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[nrtabfv0]|\p{Cc}").unwrap());

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}_]+(?:['\u{2019}\-/:][\p{L}\p{N}_]+)*").unwrap()
});

static HTML_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?:/?[a-zA-Z][\w:\-]*(?:\s[^<>]*)?/?|!--[^>]*--|![A-Z]+[^<>]*)>").unwrap()
});

static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>").unwrap());

static HTML_ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[a-zA-Z][a-zA-Z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);").unwrap()
});

static PUNCTUATION_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{P}\s]+$").unwrap());

static ADJACENT_LETTERS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}{2}").unwrap());

static RTF_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{\\rtf").unwrap());

static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[\p{L}\p{N}_]+$").unwrap());

static KEYBOARD_SHORTCUT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:ctrl|control|cmd|command|alt|option|opt|shift|win|meta|super)\s*[+\-]\s*)+(?:[a-z0-9]|f[0-9]{1,2}|del|delete|ins|insert|home|end|pgup|pgdn|pageup|pagedown|tab|space|enter|return|esc|escape|backspace|up|down|left|right|plus|minus)$",
    )
    .unwrap()
});

static LOREM_IPSUM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^lorem ipsum").unwrap());

static REAL_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}{2,}").unwrap());

static FILE_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[\w\-]+\.)+(?:com|org|net|edu|gov|io|co|uk|de|fr|jp|info|biz)(?:/\S*)?$",
    )
    .unwrap()
});

static CONTAINS_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b(?:https?|ftp|sftp)://[^\s<>]+|\bwww\.[\w\-]+\.[\w.\-/]+|[\w.+\-]+@[\w\-]+\.[\w.\-]+)",
    )
    .unwrap()
});

static MALFORMED_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s+/?[a-zA-Z]+[^<>]*>|</\s+[a-zA-Z]+\s*>").unwrap());

/// Patterns tested against the normalized text. Any match means internal.
static INTERNAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // digits, punctuation, symbols
        r"^[\p{N}\p{P}\p{S}\s]+$",
        r"^0[xX][0-9a-fA-F]+$",
        r"^\{?[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\}?$",
        // placeholder text
        r"(?i)^(?:lorem ipsum\b.*|todo:.*|fixme\b.*|tbd|x{3,}|dummy(?: text)?|placeholder)$",
        // SQL
        r"^(?:SELECT\s.+\sFROM\s|INSERT\s+INTO\s|UPDATE\s+\S+\s+SET\s|DELETE\s+FROM\s|CREATE\s+(?:TABLE|INDEX|VIEW|UNIQUE\s+INDEX)\s|DROP\s+(?:TABLE|INDEX|VIEW)\s|ALTER\s+TABLE\s|PRAGMA\s)",
        // single-entry file filter: `PNG (*.png)|*.png`
        r"^[^|]*\(\s*\*\.[\w*]+(?:\s*;\s*\*\.[\w*]+)*\s*\)\|\*\.[\w*]+(?:;\*\.[\w*]+)*(?:\|.*)?$",
        // measurements
        r"(?i)^[0-9]+(?:[.,][0-9]+)?\s*(?:px|pt|em|rem|ex|ch|vw|vh|cm|mm|in|pc|dpi|ppi|ms|kb|mb|gb|tb|khz|mhz|ghz|hz)$",
        // assertions and debug phrases
        r"(?i)^(?:assert(?:ion)?\s+failed|stack\s?trace|backtrace|unreachable(?:\s+code)?|not\s+implemented(?:\s+yet)?)\b",
        r"(?i)\b(?:should\s+(?:never|not)\s+(?:happen|get\s+here|be\s+reached)|this\s+should\s+never)\b",
        // HTML entities and opening tags
        r"^(?:&(?:[a-zA-Z][a-zA-Z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);\s*)+$",
        r"^<[a-zA-Z][\w:\-]*(?:\s[^<>]*)?/?>$",
        // PostScript and XML fragments
        r"^%!PS",
        r"^/[A-Za-z][\w\-]*\s+(?:findfont|scalefont|setfont|def)\b",
        r"^<\?xml\b",
        r"^<!DOCTYPE\b",
        r"^<!\[CDATA\[",
        r"^(?:xmlns|xml|xsl|xs):[\w\-]+",
        // encodings
        r"(?i)^(?:utf-?(?:7|8|16|32)(?:le|be)?|ucs-?[24]|us-ascii|ascii|iso[-_]?8859-[0-9]{1,2}|iso[-_]?2022-[a-z]{2}|windows-125[0-8]|cp-?[0-9]{3,5}|shift[-_]jis|sjis|euc-(?:jp|kr|cn|tw)|big5|gb2312|gbk|gb18030|koi8-[ru])$",
        // framework constants: WX_DEFINE, IDS_TITLE
        r"^[A-Z][A-Z0-9]*(?:_[A-Z0-9]+)+$",
        r"^wx[A-Z][A-Z0-9_]+$",
        // spreadsheet formulas
        r"^=\s*(?:[A-Z]{2,}\(|[A-Z]{1,3}[0-9]+)",
        // CSS
        r"(?i)^\s*(?:[\w\-.#]+\s*\{[^}]*\}|(?:color|background(?:-color|-image)?|font(?:-family|-size|-weight|-style)?|margin(?:-\w+)?|padding(?:-\w+)?|border(?:-\w+)*|text-(?:align|decoration|transform)|display|width|height|min-width|max-width|position|float|opacity|visibility|overflow|z-index|line-height|vertical-align|cursor)\s*:\s*[^;:]+;?(?:\s*[\w\-]+\s*:\s*[^;:]+;?)*)\s*$",
        // local paths
        r"^(?:~|\.{1,2})?/[^\s/]+(?:/[^\s/]*)*$",
        r"^(?:[a-zA-Z]:|\\\\[\w.\-$]+|%[A-Za-z_]+%)\\",
        r"^(?:[\w\-.~]+/)+[\w\-.~]+\.[A-Za-z0-9]{1,8}$",
        r"^(?:[\w\-.~]+\\{1,2})+[\w\-.~]+\.[A-Za-z0-9]{1,8}$",
        // wildcards and bare extensions
        r"^\*\.(?:\*|\w+)(?:\s*[;,]\s*\*\.(?:\*|\w+))*$",
        r"^\.[A-Za-z0-9]{1,8}$",
        // URLs and email
        r"(?i)^(?:(?:https?|ftp|sftp|file|ssh|git|svn|ws|wss)://|www\.|mailto:)\S+$",
        r"^[\w.+\-]+@[\w\-]+(?:\.[\w\-]+)+$",
        // clipboard fragments
        r"(?i)^(?:<!--\s*(?:start|end)fragment\s*-->|(?:version|starthtml|endhtml|startfragment|endfragment|startselection|endselection|sourceurl):.*)$",
        // printer commands
        r"^@PJL\b",
        r"^%-12345X",
        // bracketed command tokens
        r"^\[[A-Za-z_][\w\-.]*\]$",
        r"^\{[\w\-.:]+\}$",
        r"^\$\{?[A-Za-z_]\w*\}?$",
        r"^%[A-Za-z_]\w*%$",
        // Windows versions
        r"(?i)^(?:microsoft\s+)?windows\s+(?:95|98|me|nt(?:\s+[0-9.]+)?|2000|xp|vista|7|8|8\.1|10|11|server(?:\s+[0-9]{4}(?:\s+r2)?)?)$",
        // MIME types
        r"(?i)^(?:application|text|image|audio|video|multipart|font|model)/[\w.+\-]+(?:\s*;.*)?$",
        // date/time format strings
        r"^[ydMHhmsfzt]+(?:[-/:. ,T]+[ydMHhmsfzt]+)+$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Patterns tested against the text with surrounding punctuation removed.
static IDENTIFIER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // camelCase
        r"^[a-z]+(?:[A-Z][a-z0-9]*)+$",
        // PascalCase
        r"^[A-Z][a-z0-9]+(?:[A-Z][a-z0-9]*)+$",
        // snake_case
        r"^[a-z][a-z0-9]*(?:_[a-z0-9]+)+$",
        // member/namespace access
        r"^[A-Za-z_]\w*(?:\.[A-Za-z_]\w*)+$",
        r"^[A-Za-z_]\w*(?:::[A-Za-z_]\w*)+$",
        r"^[A-Za-z_]\w*->\w+$",
        // letters then digits: player1, utf8, x64
        r"^[A-Za-z]+[0-9]+[A-Za-z0-9]*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Number of real words (tokens containing at least one letter).
pub fn word_count(text: &str) -> usize {
    WORD_REGEX
        .find_iter(text)
        .filter(|m| m.as_str().chars().any(char::is_alphabetic))
        .count()
}

fn is_punctuation_only(text: &str) -> bool {
    PUNCTUATION_ONLY_REGEX.is_match(text)
}

impl Heuristics {
    /// Returns true when `text` should not be translated.
    ///
    /// With `limit_word_count`, strings with fewer real words than the
    /// configured minimum are internal, except allowed punctuation-only
    /// strings and "N/A".
    pub fn is_untranslatable_string(&self, text: &str, limit_word_count: bool) -> bool {
        let decoded = decode_unicode_escapes(text);
        let has_escaped_whitespace = ESCAPED_WHITESPACE_REGEX.is_match(&decoded);
        let is_rtf = RTF_REGEX.is_match(decoded.trim());

        let trimmed = decoded.trim_start();
        let mut text = trimmed[leading_printf_run_len(trimmed)..].trim().to_string();

        if FUNCTION_SIGNATURE_REGEX.is_match(&text) && !PLURAL_SUFFIX_REGEX.is_match(&text) {
            return true;
        }

        text = HEX_COLOR_REGEX.replace_all(&text, "").into_owned();
        text = CONTROL_NOISE_REGEX.replace_all(&text, " ").trim().to_string();

        let exempt = text.eq_ignore_ascii_case("n/a")
            || (self.options.allow_punctuation_only && is_punctuation_only(&text));
        if limit_word_count && !exempt && word_count(&text) < self.options.min_words {
            return true;
        }

        if HTML_SHAPE_REGEX.is_match(&text) {
            let stripped = HTML_TAG_REGEX.replace_all(&text, " ");
            text = HTML_ENTITY_REGEX
                .replace_all(&stripped, " ")
                .trim()
                .to_string();
        }

        if self.options.allow_punctuation_only && is_punctuation_only(&text) {
            return false;
        }
        if text.eq_ignore_ascii_case("n/a") {
            return false;
        }

        let length = text.chars().count();
        if length <= 1
            || !ADJACENT_LETTERS_REGEX.is_match(&text)
            || (length > 20 && !text.chars().any(char::is_whitespace) && !has_escaped_whitespace)
            || self.internal_strings.contains(&text.to_lowercase())
        {
            return true;
        }

        if is_rtf || HASHTAG_REGEX.is_match(&text) || KEYBOARD_SHORTCUT_REGEX.is_match(&text) {
            return true;
        }

        if length > 200 && REAL_WORD_REGEX.is_match(&text) && !LOREM_IPSUM_REGEX.is_match(&text) {
            return false;
        }

        if INTERNAL_PATTERNS
            .iter()
            .chain(self.untranslatable_patterns.iter())
            .any(|re| re.is_match(&text))
        {
            return true;
        }

        let bare = text.trim_matches(|c: char| c.is_ascii_punctuation() && c != '_');
        if IDENTIFIER_PATTERNS.iter().any(|re| re.is_match(bare)) {
            return true;
        }

        self.font_names.contains(&text.to_lowercase())
            || self
                .file_name_regex
                .as_ref()
                .is_some_and(|re| re.is_match(&text))
            || FILE_ADDRESS_REGEX.is_match(&text)
    }

    /// True when `text` contains a URL or an email address anywhere.
    pub fn contains_url(&self, text: &str) -> bool {
        CONTAINS_URL_REGEX.is_match(text)
    }

    /// True when `text` carries a broken markup tag such as `< b>`.
    pub fn has_malformed_markup(&self, text: &str) -> bool {
        MALFORMED_TAG_REGEX.is_match(text)
    }

    pub fn is_font_name(&self, name: &str) -> bool {
        self.font_names.contains(&name.trim().to_lowercase())
    }
}
