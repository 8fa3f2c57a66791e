//! `printf`-style placeholder and keyboard-accelerator tokenizers.

use std::sync::LazyLock;

use regex::Regex;

// Capture group 1: optional positional index (`%2$s`)
static PRINTF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"%(?:([0-9]+)\$)?[-+#0']*(?:\*|[0-9]+)?(?:\.(?:\*|[0-9]+))?(?:hh|h|ll|l|L|z|j|t|q|I64|I32|I)?[diouxXeEfFgGaAcspnSC%]",
    )
    .unwrap()
});

static LEADING_PRINTF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:%(?:[0-9]+\$)?[-+#0']*(?:\*|[0-9]+)?(?:\.(?:\*|[0-9]+))?(?:hh|h|ll|l|L|z|j|t|q|I64|I32|I)?[diouxXeEfFgGaAcspnSC]\s*)+",
    )
    .unwrap()
});

static SINGLE_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^%[-+#0']*[0-9]*(?:\.[0-9]+)?(?:hh|h|ll|l|L|z|j|t|I64|I32)?[diouxXeEfFgG]$",
    )
    .unwrap()
});

static HTML_ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").unwrap());

/// Extract the ordered list of C-style placeholders from `text`.
///
/// `%%` is not a placeholder. Positional placeholders (`%2$s`) are put back
/// into argument order and lose their index, so `"%2$d %1$s"` yields the
/// same list as `"%s %d"`.
///
/// ```
/// use i18n_review::core::printf::printf_commands;
///
/// assert_eq!(printf_commands("%d of %s (100%%)"), vec!["%d", "%s"]);
/// assert_eq!(printf_commands("%2$d %1$s"), vec!["%s", "%d"]);
/// ```
pub fn printf_commands(text: &str) -> Vec<String> {
    let mut tokens: Vec<(usize, String)> = Vec::new();
    let mut next_position = 1;

    for caps in PRINTF_REGEX.captures_iter(text) {
        let whole = &caps[0];
        if whole == "%%" {
            continue;
        }
        let (position, normalized) = match caps.get(1) {
            Some(index) => {
                let position = index.as_str().parse::<usize>().unwrap_or(next_position);
                (position, whole.replacen(&format!("{}$", index.as_str()), "", 1))
            }
            None => (next_position, whole.to_string()),
        };
        next_position += 1;
        tokens.push((position, normalized));
    }

    tokens.sort_by_key(|(position, _)| *position);
    tokens.into_iter().map(|(_, token)| token).collect()
}

/// Length in bytes of the run of placeholders a string starts with
/// (`"%s: file not found"` -> 2, plus the whitespace after the run).
pub fn leading_printf_run_len(text: &str) -> usize {
    LEADING_PRINTF_REGEX
        .find(text)
        .map(|m| m.end())
        .unwrap_or(0)
}

/// True when the whole string is one numeric placeholder, e.g. `"%d"`.
pub fn is_single_number_command(text: &str) -> bool {
    SINGLE_NUMBER_REGEX.is_match(text.trim())
}

/// Keyboard accelerators (`&File` -> `f`), lowercased, in order.
///
/// `&&` is an escaped ampersand and HTML entities (`&amp;`) are skipped.
pub fn accelerators(text: &str) -> Vec<char> {
    let mut found = Vec::new();
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if c != '&' {
            continue;
        }
        match iter.peek() {
            Some((_, '&')) => {
                iter.next();
            }
            Some((_, next)) if next.is_alphanumeric() => {
                if HTML_ENTITY_REGEX.is_match(&text[i..]) {
                    continue;
                }
                found.extend(next.to_lowercase());
            }
            _ => {}
        }
    }

    found
}
