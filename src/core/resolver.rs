//! Backward context resolution for string literals.
//!
//! Starting just before a literal's opening quote, walk left through the
//! buffer keeping parenthesis and brace balance until the literal's owner is
//! found: the call it is an argument of, the variable it is assigned to, or
//! nothing at all.

use super::data::UsageInfo;
use super::heuristics::Heuristics;
use super::scanner::dialect::Dialect;
use crate::utils::{is_identifier_char, is_qualified_name_char, is_space};

/// Keywords that look like calls (`if (`) but never own a string.
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "while", "for", "foreach", "switch", "return", "sizeof", "case", "else", "do",
    "catch", "using", "lock", "typeof", "nameof", "decltype", "alignof", "co_return",
];

/// Keywords that end the walk when met outside any call: `return "..."`.
const STATEMENT_KEYWORDS: &[&str] = &["return", "throw", "yield", "co_return", "co_yield", "case", "goto"];

/// Keywords that open a block rather than name an initialised variable.
const BLOCK_KEYWORDS: &[&str] = &[
    "try", "finally", "unsafe", "checked", "unchecked", "get", "set", "init", "add", "remove",
    "namespace", "class", "struct", "enum", "union",
];

/// Words that can precede a call but are never its declared type.
const EXPRESSION_KEYWORDS: &[&str] = &[
    "new", "throw", "await", "delete", "goto", "yield", "co_yield", "co_await", "operator",
    "in", "out", "ref", "is", "as", "not", "and", "or", "auto", "var",
];

/// Qualifiers skipped when reading a variable's declared type.
const TYPE_QUALIFIERS: &[&str] = &[
    "const", "constexpr", "static", "inline", "extern", "volatile", "mutable", "readonly",
    "public", "private", "protected", "internal",
];

/// What owns a literal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedContext {
    pub function: String,
    pub variable: String,
    pub variable_type: String,
    /// Legacy wrapper macro the literal was passed through, if any.
    pub deprecated_macro: Option<String>,
    /// Start of the resolved function's name. Resolving again from here
    /// finds the call enclosing that call.
    pub outer_position: Option<usize>,
}

impl ResolvedContext {
    pub fn variable(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            variable: name.into(),
            variable_type: declared_type.into(),
            ..Default::default()
        }
    }

    pub fn usage(&self) -> UsageInfo {
        if !self.function.is_empty() {
            UsageInfo::function(&self.function)
        } else if !self.variable.is_empty() {
            UsageInfo::variable(&self.variable, &self.variable_type)
        } else {
            UsageInfo::Orphan
        }
    }

    pub fn is_orphan(&self) -> bool {
        self.function.is_empty() && self.variable.is_empty()
    }
}

fn skip_spaces_back(buf: &[char], mut pos: usize) -> usize {
    while pos > 0 && is_space(buf[pos - 1]) {
        pos -= 1;
    }
    pos
}

/// Skip a balanced `open ... close` group ending just before `pos`.
fn skip_group_back(buf: &[char], mut pos: usize, open: char, close: char) -> usize {
    let mut depth = 0usize;
    while pos > 0 {
        let c = buf[pos - 1];
        pos -= 1;
        if c == close {
            depth += 1;
        } else if c == open {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                break;
            }
        }
    }
    pos
}

/// Skip a quoted literal (`"..."` or `'...'`) ending just before `pos`.
fn skip_quoted_back(buf: &[char], mut pos: usize, quote: char) -> usize {
    pos -= 1;
    while pos > 0 {
        pos -= 1;
        if buf[pos] == quote && !crate::utils::is_escaped(buf, pos) {
            return pos;
        }
    }
    0
}

/// Read a (possibly qualified, possibly templated) name ending at `end`.
/// Returns the raw name and its start.
fn read_name_back(buf: &[char], end: usize) -> (String, usize) {
    let mut pos = end;
    // `make_shared<Foo>(` and friends
    if pos > 0 && buf[pos - 1] == '>' && !(pos > 1 && buf[pos - 2] == '-') {
        pos = skip_spaces_back(buf, skip_group_back(buf, pos, '<', '>'));
    }
    let name_end = pos;
    while pos > 0 && is_qualified_name_char(buf[pos - 1]) {
        pos -= 1;
    }
    let mut start = pos;
    // drop leading accessor fragments left by a stray `-` or `>`
    while start < name_end && !(is_identifier_char(buf[start]) || buf[start] == '~') {
        start += 1;
    }
    let name: String = buf[start..name_end].iter().collect();
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return (String::new(), end);
    }
    (name, start)
}

/// Read the declared type in front of a variable name starting at `name_start`.
fn read_type_back<D: Dialect + ?Sized>(dialect: &D, buf: &[char], name_start: usize) -> String {
    let mut pos = skip_spaces_back(buf, name_start);
    loop {
        while pos > 0 && matches!(buf[pos - 1], '*' | '&') {
            pos = skip_spaces_back(buf, pos - 1);
        }
        if pos == 0 || !(is_qualified_name_char(buf[pos - 1]) || buf[pos - 1] == '>') {
            return String::new();
        }
        let (word, start) = read_name_back(buf, pos);
        if word.is_empty() {
            return String::new();
        }
        if TYPE_QUALIFIERS.contains(&word.as_str()) {
            pos = skip_spaces_back(buf, start);
            continue;
        }
        if CONTROL_KEYWORDS.contains(&word.as_str())
            || EXPRESSION_KEYWORDS.contains(&word.as_str())
            || !word.ends_with(|c: char| is_identifier_char(c))
        {
            return String::new();
        }
        return dialect.decorate_name(&word);
    }
}

/// Variable on the left of an assignment operator at `eq` (index of `=`).
fn read_assignment<D: Dialect + ?Sized>(
    dialect: &D,
    buf: &[char],
    eq: usize,
) -> ResolvedContext {
    let mut pos = eq;
    if pos > 0 && matches!(buf[pos - 1], '+' | '|' | '-' | '*' | '/') {
        pos -= 1;
    }
    pos = skip_spaces_back(buf, pos);
    while pos > 0 && buf[pos - 1] == ']' {
        pos = skip_spaces_back(buf, skip_group_back(buf, pos, '[', ']'));
    }

    let (name, start) = read_name_back(buf, pos);
    if name.is_empty() {
        return ResolvedContext::default();
    }
    let declared_type = read_type_back(dialect, buf, start);
    ResolvedContext::variable(dialect.decorate_name(&name), declared_type)
}

/// Find what owns the literal whose prefix starts at `start`.
///
/// Wrapper macros (`wxT`, `_T`, `wxString`, ...) are looked through; the
/// first deprecated one met is reported. A call to a type whose constructor
/// arguments are always internal stops the walk right there.
pub fn read_var_or_function_name<D: Dialect + ?Sized>(
    heuristics: &Heuristics,
    dialect: &D,
    buf: &[char],
    start: usize,
) -> ResolvedContext {
    let mut pos = start.min(buf.len());
    let mut paren_depth = 0usize;
    let mut brace_depth = 0usize;
    let mut deprecated_macro: Option<String> = None;
    let mut compared = false;

    let orphan = |deprecated_macro: Option<String>| ResolvedContext {
        deprecated_macro,
        ..Default::default()
    };

    while pos > 0 {
        let c = buf[pos - 1];
        match c {
            ')' => {
                paren_depth += 1;
                pos -= 1;
            }
            '(' if paren_depth > 0 => {
                paren_depth -= 1;
                pos -= 1;
            }
            '(' => {
                let name_end = skip_spaces_back(buf, pos - 1);
                let (raw_name, name_start) = read_name_back(buf, name_end);
                if raw_name.is_empty() {
                    // grouping or cast parentheses
                    pos -= 1;
                    continue;
                }
                let name = dialect.decorate_name(&raw_name);
                if CONTROL_KEYWORDS.contains(&name.as_str()) {
                    tracing::trace!(keyword = %name, "literal inside control statement");
                    return orphan(deprecated_macro);
                }
                if heuristics.is_wrapper_to_ignore(&name) {
                    if deprecated_macro.is_none() && heuristics.deprecated_macro(&name).is_some() {
                        deprecated_macro = Some(name.clone());
                    }
                    tracing::trace!(wrapper = %name, "looking through wrapper");
                    pos = name_start;
                    continue;
                }
                if heuristics.is_variable_type_to_ignore(&name) {
                    tracing::trace!(type_name = %name, "constructor of an internal type");
                    return ResolvedContext {
                        function: name,
                        deprecated_macro,
                        outer_position: Some(name_start),
                        ..Default::default()
                    };
                }
                // `wxString label("...")` declares a variable
                let declared_type = read_type_back(dialect, buf, name_start);
                if !declared_type.is_empty() {
                    let mut context = ResolvedContext::variable(name, declared_type);
                    context.deprecated_macro = deprecated_macro;
                    return context;
                }
                return ResolvedContext {
                    function: name,
                    deprecated_macro,
                    outer_position: Some(name_start),
                    ..Default::default()
                };
            }
            '}' => {
                brace_depth += 1;
                pos -= 1;
            }
            '{' if brace_depth > 0 => {
                brace_depth -= 1;
                pos -= 1;
            }
            '{' => {
                let before = skip_spaces_back(buf, pos - 1);
                if before > 0 && buf[before - 1] == '=' {
                    // `x = { "a", "b" }`
                    pos = before;
                    continue;
                }
                if before > 0 && matches!(buf[before - 1], ',' | '{' | '(') {
                    // nested initialiser list
                    pos = before;
                    continue;
                }
                if before > 0 && (is_identifier_char(buf[before - 1]) || buf[before - 1] == ']') {
                    // brace initialisation: `std::string names[]{ "a" }`
                    let mut end = before;
                    while end > 0 && buf[end - 1] == ']' {
                        end = skip_spaces_back(buf, skip_group_back(buf, end, '[', ']'));
                    }
                    let (raw_name, name_start) = read_name_back(buf, end);
                    let name = dialect.decorate_name(&raw_name);
                    if name.is_empty()
                        || CONTROL_KEYWORDS.contains(&name.as_str())
                        || BLOCK_KEYWORDS.contains(&name.as_str())
                    {
                        return orphan(deprecated_macro);
                    }
                    let mut context =
                        ResolvedContext::variable(name, read_type_back(dialect, buf, name_start));
                    context.deprecated_macro = deprecated_macro;
                    return context;
                }
                return orphan(deprecated_macro);
            }
            '=' if buf.get(pos) == Some(&'>') => {
                // lambda arrow
                pos -= 1;
            }
            '=' if paren_depth == 0 && brace_depth == 0 => {
                let eq = pos - 1;
                if eq > 0 && matches!(buf[eq - 1], '=' | '!' | '<' | '>') {
                    // a comparison: whatever encloses it decides, but it is
                    // never assigned to anything
                    tracing::trace!("literal inside a comparison");
                    compared = true;
                    pos = eq - 1;
                    continue;
                }
                if compared {
                    return orphan(deprecated_macro);
                }
                let mut context = read_assignment(dialect, buf, eq);
                context.deprecated_macro = deprecated_macro;
                return context;
            }
            // statements inside a lambda body or block don't end the walk
            ';' if paren_depth == 0 && brace_depth == 0 => return orphan(deprecated_macro),
            '"' | '\'' => {
                pos = skip_quoted_back(buf, pos, c);
            }
            c if is_identifier_char(c) => {
                let mut word_start = pos - 1;
                while word_start > 0 && is_identifier_char(buf[word_start - 1]) {
                    word_start -= 1;
                }
                if paren_depth == 0 && brace_depth == 0 {
                    let word: String = buf[word_start..pos].iter().collect();
                    if STATEMENT_KEYWORDS.contains(&word.as_str()) {
                        return orphan(deprecated_macro);
                    }
                }
                pos = word_start;
            }
            _ => pos -= 1,
        }
    }

    orphan(deprecated_macro)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::heuristics::{ClassifierOptions, HeuristicsBuilder};
    use crate::core::scanner::dialect::{CSharpDialect, CppDialect};

    fn resolve(source: &str) -> ResolvedContext {
        resolve_with(&Heuristics::default(), source)
    }

    fn resolve_with(heuristics: &Heuristics, source: &str) -> ResolvedContext {
        let buf: Vec<char> = source.chars().collect();
        let quote = source.rfind('"').map(|b| source[..b].chars().count()).unwrap_or(0);
        // start of the last literal, prefix included
        let open = buf[..quote]
            .iter()
            .rposition(|c| *c == '"')
            .unwrap_or(0);
        let start = open - CppDialect.prefix_len(&buf, open);
        read_var_or_function_name(heuristics, &CppDialect, &buf, start)
    }

    #[test]
    fn test_function_call() {
        let context = resolve(r#"MessageBox("Failed adding book helpfiles/another.hhp");"#);
        assert_eq!(context.function, "MessageBox");
        assert_eq!(context.usage(), UsageInfo::function("MessageBox"));
        assert_eq!(context.outer_position, Some(0));
    }

    #[test]
    fn test_second_argument() {
        let context = resolve(r#"wxMessageBox(GetTitle(x), "Second argument")"#);
        assert_eq!(context.function, "wxMessageBox");
    }

    #[test]
    fn test_comparison_is_orphan() {
        assert!(resolve(r#"if (value == "my message")"#).is_orphan());
        assert!(resolve(r#"if (value != "my message")"#).is_orphan());
        assert!(resolve(r#"return "my message";"#).is_orphan());
        assert!(resolve(r#"bool same = value == "my message";"#).is_orphan());
    }

    #[test]
    fn test_lambda_argument_before_literal() {
        let context = resolve(r#"ShowMessage([]() { Refresh(); }, "Could not open the file");"#);
        assert_eq!(context.function, "ShowMessage");

        let context =
            resolve(r#"Defer([&] { if (done) return; Close(); }, "Closing the window");"#);
        assert_eq!(context.function, "Defer");

        // a finished statement before the literal still ends the walk
        assert!(resolve(r#"Refresh(); "Stray message""#).is_orphan());
    }

    #[test]
    fn test_comparison_inside_call() {
        let context = resolve(r#"assert(ptr != nullptr && "The pointer must be valid");"#);
        assert_eq!(context.function, "assert");
    }

    #[test]
    fn test_constructor_declaration() {
        let context = resolve(r#"wxColour background("light steel blue");"#);
        assert_eq!(context.variable, "background");
        assert_eq!(context.variable_type, "wxColour");

        let context = resolve(r#"return MessageBox("Are you sure?");"#);
        assert_eq!(context.function, "MessageBox");

        let context = resolve(r#"throw std::runtime_error("Cannot open the file");"#);
        assert_eq!(context.function, "runtime_error");

        let context = resolve("public:\n    SetTitle(\"Window title\");");
        assert_eq!(context.function, "SetTitle");
    }

    #[test]
    fn test_variable_assignment() {
        let context = resolve(r#"const wchar_t* message = L"Hello there";"#);
        assert_eq!(context.variable, "message");
        assert_eq!(context.variable_type, "wchar_t");

        let context = resolve(r#"static const std::string names[3] = { "a", "Last name" };"#);
        assert_eq!(context.variable, "names");
        assert_eq!(context.variable_type, "string");

        let context = resolve(r#"label += "more text";"#);
        assert_eq!(context.variable, "label");
        assert_eq!(context.variable_type, "");

        let context = resolve(r#"this->m_title = "Window title";"#);
        assert_eq!(context.variable, "m_title");
    }

    #[test]
    fn test_brace_initialisation() {
        let context = resolve(r#"std::string greeting{ "Hello there" };"#);
        assert_eq!(context.variable, "greeting");
        assert_eq!(context.variable_type, "string");

        let context = resolve(r#"std::map<std::string, int> table = { {"one", 1}, {"two", 2} };"#);
        assert_eq!(context.variable, "table");

        assert!(resolve(r#"string Name { get { return "Window title"; } }"#).is_orphan());
        assert!(resolve(r#"void f() { "Loose text"; }"#).is_orphan());
    }

    #[test]
    fn test_wrapper_is_looked_through() {
        let context = resolve(r#"SetLabel(_T("Open file"));"#);
        assert_eq!(context.function, "SetLabel");
        assert_eq!(context.deprecated_macro.as_deref(), Some("_T"));

        let context = resolve(r#"wxString title = wxString::Format("Page %d", n);"#);
        assert_eq!(context.variable, "title");
        assert_eq!(context.deprecated_macro, None);
    }

    #[test]
    fn test_deprecated_macro_respects_cpp_version() {
        let heuristics = HeuristicsBuilder::new()
            .options(ClassifierOptions {
                min_cpp_version: 3,
                ..Default::default()
            })
            .build();
        let context = resolve_with(&heuristics, r#"SetLabel(_T("Open file"));"#);
        assert_eq!(context.function, "SetLabel");
        assert_eq!(context.deprecated_macro, None);
    }

    #[test]
    fn test_templates_and_members() {
        let context = resolve(r#"auto p = std::make_shared<Widget>("Widget name");"#);
        assert_eq!(context.function, "make_shared");

        let context = resolve(r#"dialog->SetTitle("Window title");"#);
        assert_eq!(context.function, "SetTitle");
    }

    #[test]
    fn test_outer_call() {
        let source = r#"wxLogDebug(_("Internal message"));"#;
        let buf: Vec<char> = source.chars().collect();
        let heuristics = Heuristics::default();
        let inner = resolve_with(&heuristics, source);
        assert_eq!(inner.function, "_");
        let outer = read_var_or_function_name(
            &heuristics,
            &CppDialect,
            &buf,
            inner.outer_position.unwrap(),
        );
        assert_eq!(outer.function, "wxLogDebug");
    }

    #[test]
    fn test_statement_boundary() {
        assert!(resolve(r#"Foo(); "lonely string""#).is_orphan());
        assert!(resolve(r#""lonely string""#).is_orphan());
    }

    #[test]
    fn test_csharp_keeps_member_path() {
        let source = r#"System.Diagnostics.Debug.WriteLine("Value changed");"#;
        let buf: Vec<char> = source.chars().collect();
        let start = source.find('"').unwrap();
        let context =
            read_var_or_function_name(&Heuristics::default(), &CSharpDialect, &buf, start);
        assert_eq!(context.function, "Diagnostics.Debug.WriteLine");
    }
}
