//! Heuristic tables shared by every scanner.
//!
//! The tables are seeded with built-in defaults, extended by the caller
//! through [`HeuristicsBuilder`], and then frozen. A built [`Heuristics`] is
//! read-only and can be shared (`Arc`) across any number of scanners running
//! in parallel. Rebuilding is comparatively expensive, so a driver builds it
//! once per run and only clears scanner *results* between runs.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use thiserror::Error;

use super::data::DiagnosticMessage;

/// Errors raised while registering caller-supplied heuristics.
#[derive(Debug, Error)]
pub enum HeuristicsError {
    #[error("invalid {table} pattern \"{pattern}\": {source}")]
    InvalidPattern {
        table: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A legacy string-wrapping macro and what to use instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedMacro {
    pub suggestion: String,
    /// Lowest C++ standard (11, 14, 17, ...) at which the suggestion applies.
    pub min_cpp_version: u8,
}

/// Knobs that change how strings are classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// Minimum number of real words for a string to count as a user message.
    pub min_words: usize,
    /// Whether strings made only of punctuation may be translatable.
    pub allow_punctuation_only: bool,
    /// Whether arguments to logging functions may be user-facing.
    pub log_messages_translatable: bool,
    /// Whether strings thrown in exceptions must be translatable.
    pub exceptions_translatable: bool,
    /// Minimum C++ standard the reviewed code targets.
    pub min_cpp_version: u8,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            min_words: 2,
            allow_punctuation_only: false,
            log_messages_translatable: true,
            exceptions_translatable: true,
            min_cpp_version: 14,
        }
    }
}

/// Frozen heuristic tables. Build with [`HeuristicsBuilder`].
#[derive(Debug)]
pub struct Heuristics {
    pub(crate) options: ClassifierOptions,
    i18n_functions: HashSet<String>,
    non_translatable_functions: HashSet<String>,
    internal_functions: HashSet<String>,
    log_functions: HashSet<String>,
    exceptions: HashSet<String>,
    wrappers_to_ignore: HashSet<String>,
    deprecated_macros: HashMap<String, DeprecatedMacro>,
    variable_types_to_ignore: HashSet<String>,
    ignored_variable_patterns: Vec<Regex>,
    pub(crate) untranslatable_patterns: Vec<Regex>,
    /// Lowercased.
    pub(crate) internal_strings: HashSet<String>,
    /// Lowercased.
    pub(crate) font_names: HashSet<String>,
    pub(crate) file_name_regex: Option<Regex>,
    diagnostics: Vec<DiagnosticMessage>,
}

impl Default for Heuristics {
    fn default() -> Self {
        HeuristicsBuilder::new().build()
    }
}

/// Looks a name up by its full spelling, then by every shorter qualified
/// suffix (`System.Diagnostics.Debug.WriteLine` -> `Diagnostics.Debug.WriteLine`
/// -> `Debug.WriteLine` -> `WriteLine`).
fn lookup(set: &HashSet<String>, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    qualified_suffixes(name).any(|suffix| set.contains(suffix))
}

/// `name` followed by each suffix that starts after a `::`, `.` or `->`.
fn qualified_suffixes(name: &str) -> impl Iterator<Item = &str> {
    let cuts = name.char_indices().filter_map(move |(i, c)| match c {
        '.' => Some(i + 1),
        ':' if name[i + 1..].starts_with(':') => Some(i + 2),
        '>' if i > 0 && name[..i].ends_with('-') => Some(i + 1),
        _ => None,
    });
    std::iter::once(0)
        .chain(cuts)
        .filter(move |&cut| cut < name.len())
        .map(move |cut| &name[cut..])
}

/// Last component of a qualified name.
pub fn last_segment(name: &str) -> &str {
    let cut = [name.rfind("::").map(|i| i + 2), name.rfind('.').map(|i| i + 1)]
        .into_iter()
        .flatten()
        .chain(name.rfind("->").map(|i| i + 2))
        .max()
        .unwrap_or(0);
    &name[cut..]
}

impl Heuristics {
    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// Diagnostics recorded while registering caller-supplied entries.
    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        &self.diagnostics
    }

    pub fn is_i18n_function(&self, name: &str) -> bool {
        lookup(&self.i18n_functions, name)
    }

    pub fn is_non_translatable_function(&self, name: &str) -> bool {
        lookup(&self.non_translatable_functions, name)
    }

    pub fn is_internal_function(&self, name: &str) -> bool {
        lookup(&self.internal_functions, name)
    }

    pub fn is_log_function(&self, name: &str) -> bool {
        lookup(&self.log_functions, name)
    }

    pub fn is_exception(&self, name: &str) -> bool {
        lookup(&self.exceptions, name)
    }

    /// Wrapper constructors/macros the resolver looks through.
    pub fn is_wrapper_to_ignore(&self, name: &str) -> bool {
        lookup(&self.wrappers_to_ignore, name) || self.deprecated_macros.contains_key(name)
    }

    /// The deprecated-macro entry for `name`, if one applies at the configured
    /// language standard.
    pub fn deprecated_macro(&self, name: &str) -> Option<&DeprecatedMacro> {
        self.deprecated_macros
            .get(name)
            .filter(|m| self.options.min_cpp_version >= m.min_cpp_version)
    }

    /// Types whose constructor arguments and assigned values are internal.
    pub fn is_variable_type_to_ignore(&self, type_name: &str) -> bool {
        lookup(&self.variable_types_to_ignore, type_name)
    }

    pub fn is_ignored_variable_name(&self, name: &str) -> bool {
        let name = last_segment(name);
        self.ignored_variable_patterns
            .iter()
            .any(|re| re.is_match(name))
    }

    /// Whether a call's string arguments are internal by virtue of the
    /// function alone (diagnostics, and logging/exceptions per options).
    pub fn is_internal_call(&self, name: &str) -> bool {
        self.is_internal_function(name)
            || self.is_variable_type_to_ignore(name)
            || (!self.options.log_messages_translatable && self.is_log_function(name))
            || (!self.options.exceptions_translatable && self.is_exception(name))
    }
}

/// Builder for [`Heuristics`], seeded with the built-in tables.
#[derive(Debug)]
pub struct HeuristicsBuilder {
    inner: Heuristics,
    extensions: HashSet<String>,
}

impl Default for HeuristicsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl HeuristicsBuilder {
    pub fn new() -> Self {
        let ignored_variable_patterns = DEFAULT_IGNORED_VARIABLE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect();

        let deprecated_macros = DEFAULT_DEPRECATED_MACROS
            .iter()
            .map(|(name, suggestion, min_cpp_version)| {
                (
                    name.to_string(),
                    DeprecatedMacro {
                        suggestion: suggestion.to_string(),
                        min_cpp_version: *min_cpp_version,
                    },
                )
            })
            .collect();

        Self {
            inner: Heuristics {
                options: ClassifierOptions::default(),
                i18n_functions: to_set(DEFAULT_I18N_FUNCTIONS),
                non_translatable_functions: to_set(DEFAULT_NON_TRANSLATABLE_FUNCTIONS),
                internal_functions: to_set(DEFAULT_INTERNAL_FUNCTIONS),
                log_functions: to_set(DEFAULT_LOG_FUNCTIONS),
                exceptions: to_set(DEFAULT_EXCEPTIONS),
                wrappers_to_ignore: to_set(DEFAULT_WRAPPERS_TO_IGNORE),
                deprecated_macros,
                variable_types_to_ignore: to_set(DEFAULT_VARIABLE_TYPES_TO_IGNORE),
                ignored_variable_patterns,
                untranslatable_patterns: Vec::new(),
                internal_strings: DEFAULT_INTERNAL_STRINGS
                    .iter()
                    .map(|s| s.to_lowercase())
                    .collect(),
                font_names: DEFAULT_FONT_NAMES.iter().map(|s| s.to_lowercase()).collect(),
                file_name_regex: None,
                diagnostics: Vec::new(),
            },
            extensions: to_set(DEFAULT_FILE_EXTENSIONS),
        }
    }

    pub fn options(mut self, options: ClassifierOptions) -> Self {
        self.inner.options = options;
        self
    }

    pub fn add_i18n_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .i18n_functions
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn add_non_translatable_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .non_translatable_functions
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn add_internal_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .internal_functions
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn add_variable_types_to_ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .variable_types_to_ignore
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn add_font_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner
            .font_names
            .extend(names.into_iter().map(|s| s.as_ref().to_lowercase()));
        self
    }

    pub fn add_file_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions.extend(
            extensions
                .into_iter()
                .map(|s| s.as_ref().trim_start_matches('.').to_lowercase())
                .filter(|s| !s.is_empty()),
        );
        self
    }

    pub fn add_internal_strings<I, S>(mut self, strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner
            .internal_strings
            .extend(strings.into_iter().map(|s| s.as_ref().to_lowercase()));
        self
    }

    /// Register a regex matched against variable names whose values are
    /// internal (`^sql.*`).
    pub fn try_add_ignored_variable_pattern(&mut self, pattern: &str) -> Result<(), HeuristicsError> {
        let re = compile("ignored variable", pattern)?;
        self.inner.ignored_variable_patterns.push(re);
        Ok(())
    }

    /// Register an additional "looks internal" regex for the classifier.
    pub fn try_add_untranslatable_pattern(&mut self, pattern: &str) -> Result<(), HeuristicsError> {
        let re = compile("untranslatable", pattern)?;
        self.inner.untranslatable_patterns.push(re);
        Ok(())
    }

    /// Register patterns, degrading gracefully: a pattern that fails to
    /// compile is skipped and recorded as a diagnostic.
    pub fn add_ignored_variable_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            if let Err(err) = self.try_add_ignored_variable_pattern(pattern.as_ref()) {
                self.record(pattern.as_ref(), err);
            }
        }
        self
    }

    /// See [`Self::add_ignored_variable_patterns`].
    pub fn add_untranslatable_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            if let Err(err) = self.try_add_untranslatable_pattern(pattern.as_ref()) {
                self.record(pattern.as_ref(), err);
            }
        }
        self
    }

    fn record(&mut self, pattern: &str, err: HeuristicsError) {
        self.inner
            .diagnostics
            .push(DiagnosticMessage::global(pattern.to_string(), err.to_string()));
    }

    pub fn build(mut self) -> Heuristics {
        let mut extensions: Vec<&String> = self.extensions.iter().collect();
        // longest first so `tiff` wins over `tif`
        extensions.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = extensions
            .iter()
            .map(|e| regex::escape(e))
            .collect::<Vec<_>>()
            .join("|");
        if !alternation.is_empty() {
            let pattern = format!(r"(?i)^(?:\*|[\w\-~.$%]*[\w\-~])\.(?:{})$", alternation);
            match Regex::new(&pattern) {
                Ok(re) => self.inner.file_name_regex = Some(re),
                Err(err) => {
                    let err = HeuristicsError::InvalidPattern {
                        table: "file extension",
                        pattern,
                        source: err,
                    };
                    self.record("file-extensions", err);
                }
            }
        }
        self.inner
    }
}

fn compile(table: &'static str, pattern: &str) -> Result<Regex, HeuristicsError> {
    Regex::new(pattern).map_err(|source| HeuristicsError::InvalidPattern {
        table,
        pattern: pattern.to_string(),
        source,
    })
}

// ============================================================
// Built-in tables
// ============================================================

const DEFAULT_I18N_FUNCTIONS: &[&str] = &[
    // gettext
    "_",
    "N_",
    "gettext",
    "dgettext",
    "dcgettext",
    "ngettext",
    "dngettext",
    "dcngettext",
    "pgettext",
    "npgettext",
    "gettext_noop",
    // wxWidgets
    "wxGetTranslation",
    "wxTRANSLATE",
    "wxTRANSLATE_IN_CONTEXT",
    "wxPLURAL",
    "wxGETTEXT_IN_CONTEXT",
    "wxGETTEXT_IN_CONTEXT_PLURAL",
    // Qt
    "tr",
    "trUtf8",
    "translate",
    "qsTr",
    "qsTranslate",
    "QT_TR_NOOP",
    "QT_TR_N_NOOP",
    "QT_TRANSLATE_NOOP",
    "QT_TRANSLATE_N_NOOP",
    // KDE
    "i18n",
    "i18nc",
    "i18np",
    "i18ncp",
    "ki18n",
    "ki18nc",
    "tr2i18n",
];

const DEFAULT_NON_TRANSLATABLE_FUNCTIONS: &[&str] = &["_DT", "DONTTRANSLATE", "DNT", "_DNT"];

const DEFAULT_INTERNAL_FUNCTIONS: &[&str] = &[
    // assertions and debug output
    "assert",
    "static_assert",
    "_ASSERT",
    "_ASSERTE",
    "ASSERT",
    "VERIFY",
    "wxASSERT",
    "wxASSERT_MSG",
    "wxFAIL_MSG",
    "wxCHECK_MSG",
    "wxCHECK2_MSG",
    "wxCHECK_RET",
    "wxLogDebug",
    "wxLogTrace",
    "wxTrap",
    "TRACE",
    "ATLTRACE",
    "ATLTRACE2",
    "OutputDebugString",
    "OutputDebugStringA",
    "OutputDebugStringW",
    "qDebug",
    "Q_ASSERT",
    "Q_ASSERT_X",
    "BOOST_ASSERT_MSG",
    "DbgPrint",
    "DebugPrint",
    "Debug.Assert",
    "Debug.Fail",
    "Debug.Print",
    "Debug.Write",
    "Debug.WriteLine",
    "Debug.WriteIf",
    "Debug.WriteLineIf",
    "Trace.Write",
    "Trace.WriteLine",
    "Trace.TraceError",
    "Trace.TraceWarning",
    "Trace.TraceInformation",
    "LogDebug",
    "LogTrace",
    // OS and library plumbing
    "GetProcAddress",
    "LoadLibrary",
    "LoadLibraryW",
    "LoadLibraryEx",
    "GetModuleHandle",
    "GetModuleHandleW",
    "dlopen",
    "dlsym",
    "getenv",
    "_wgetenv",
    "setenv",
    "putenv",
    "SetEnvironmentVariable",
    "GetEnvironmentVariable",
    "Environment.GetEnvironmentVariable",
    "RegOpenKeyEx",
    "RegQueryValueEx",
    "RegSetValueEx",
    "RegCreateKeyEx",
    "fopen",
    "_wfopen",
    "freopen",
    "CreateFile",
    "CreateFileW",
    "CreateEvent",
    "CreateMutex",
    "FindWindow",
    "RegisterWindowMessage",
    "RegisterClipboardFormat",
    "strcmp",
    "wcscmp",
    "strncmp",
    "wcsncmp",
    "strcasecmp",
    "stricmp",
    "_stricmp",
    "_wcsicmp",
    "strstr",
    "wcsstr",
    "strchr",
    "wcschr",
    "find",
    "rfind",
    "find_first_of",
    "find_last_of",
    "starts_with",
    "ends_with",
    "StartsWith",
    "EndsWith",
    "IsSameAs",
    "CmpNoCase",
    "XRCID",
    "XRCCTRL",
    "SetOption",
    "GetOption",
    "GetAttribute",
    "SetAttribute",
    "GetAttributeValue",
    "GetPropVal",
];

const DEFAULT_LOG_FUNCTIONS: &[&str] = &[
    "wxLogMessage",
    "wxLogError",
    "wxLogWarning",
    "wxLogVerbose",
    "wxLogStatus",
    "wxLogInfo",
    "wxLogFatalError",
    "wxLogSysError",
    "qInfo",
    "qWarning",
    "qCritical",
    "qFatal",
    "syslog",
    "LogMessage",
    "LogError",
    "LogWarning",
    "LogInformation",
    "LogCritical",
    "LOG",
    "LOG_INFO",
    "LOG_WARNING",
    "LOG_ERROR",
    "spdlog::info",
    "spdlog::warn",
    "spdlog::error",
    "spdlog::critical",
];

const DEFAULT_EXCEPTIONS: &[&str] = &[
    "exception",
    "runtime_error",
    "logic_error",
    "invalid_argument",
    "out_of_range",
    "length_error",
    "domain_error",
    "range_error",
    "overflow_error",
    "underflow_error",
    "system_error",
    "Exception",
    "ApplicationException",
    "ArgumentException",
    "ArgumentOutOfRangeException",
    "InvalidOperationException",
    "NotSupportedException",
    "NotImplementedException",
    "IOException",
    "FileNotFoundException",
    "FormatException",
    "InvalidDataException",
    "KeyNotFoundException",
    "TimeoutException",
    "UnauthorizedAccessException",
];

/// Constructors and macros whose string argument is really the argument of
/// whatever encloses them.
const DEFAULT_WRAPPERS_TO_IGNORE: &[&str] = &[
    "L",
    "string",
    "wstring",
    "u16string",
    "u32string",
    "string_view",
    "wstring_view",
    "basic_string",
    "wxString",
    "FromUTF8",
    "FromAscii",
    "FromUTF8Unchecked",
    "Format",
    "QString",
    "fromUtf8",
    "fromLatin1",
    "QStringLiteral",
    "QLatin1String",
    "QLatin1StringView",
    "CString",
    "CStringA",
    "CStringW",
    "_bstr_t",
    "CComBSTR",
];

/// (macro, suggestion, minimum C++ standard)
const DEFAULT_DEPRECATED_MACROS: &[(&str, &str, u8)] = &[
    ("wxT", "wxT() macro can be removed.", 0),
    ("wxT_2", "wxT_2() macro can be removed.", 0),
    ("wxS", "wxS() macro can be removed.", 0),
    (
        "_T",
        "_T() macro can be removed. Prefix with 'L' to make it a wide string.",
        11,
    ),
    (
        "__T",
        "__T() macro can be removed. Prefix with 'L' to make it a wide string.",
        11,
    ),
    (
        "TEXT",
        "TEXT() macro can be removed. Prefix with 'L' to make it a wide string.",
        11,
    ),
    (
        "_TEXT",
        "_TEXT() macro can be removed. Prefix with 'L' to make it a wide string.",
        11,
    ),
    (
        "__TEXT",
        "__TEXT() macro can be removed. Prefix with 'L' to make it a wide string.",
        11,
    ),
];

const DEFAULT_VARIABLE_TYPES_TO_IGNORE: &[&str] = &[
    "wxColour",
    "wxColor",
    "QColor",
    "Color",
    "wxFont",
    "QFont",
    "Font",
    "FontFamily",
    "wxRegEx",
    "regex",
    "wregex",
    "basic_regex",
    "QRegExp",
    "QRegularExpression",
    "Regex",
    "wxUniChar",
    "wxCursor",
    "wxIcon",
    "wxBitmap",
    "wxBitmapBundle",
    "wxImage",
    "QIcon",
    "QPixmap",
    "QImage",
    "wxURI",
    "QUrl",
    "Uri",
    "Guid",
    "QUuid",
    "wxDataFormat",
    "path",
    "wxFileName",
    "wxConfig",
    "wxFileConfig",
    "QSettings",
];

const DEFAULT_IGNORED_VARIABLE_PATTERNS: &[&str] = &[
    r"(?i)^(debug|trace|sql|regex|xml|html|css|json|mime)",
    r"(?i)(sql|regex|pattern|mime|mimetype|xml|xpath|json|css|url|uri|guid|uuid|font|fontname|color|colour|path|filepath|filename|file_name|directory|folder|extension|separator|delimiter|classname|class_name|registrykey|reg_key|envvar|env_var|command|query|stylesheet)$",
];

const DEFAULT_INTERNAL_STRINGS: &[&str] = &[
    "size_t",
    "localhost",
    "nullptr",
    "null",
    "true",
    "false",
    "ascii",
    "ansi",
    "posix",
    "wxwidgets",
    "stdout",
    "stderr",
    "stdin",
];

const DEFAULT_FONT_NAMES: &[&str] = &[
    "Arial",
    "Arial Black",
    "Calibri",
    "Cambria",
    "Candara",
    "Comic Sans MS",
    "Consolas",
    "Constantia",
    "Corbel",
    "Courier",
    "Courier New",
    "DejaVu Sans",
    "Franklin Gothic",
    "Garamond",
    "Georgia",
    "Helvetica",
    "Impact",
    "Liberation Sans",
    "Lucida Console",
    "Lucida Grande",
    "Lucida Sans Unicode",
    "Malgun Gothic",
    "Meiryo",
    "Menlo",
    "Microsoft YaHei",
    "Monaco",
    "MS Gothic",
    "MS Mincho",
    "MS Sans Serif",
    "MS Serif",
    "MS Shell Dlg",
    "MS Shell Dlg 2",
    "Noto Sans",
    "Open Sans",
    "Palatino Linotype",
    "Roboto",
    "Segoe UI",
    "Segoe UI Symbol",
    "SimSun",
    "Symbol",
    "Tahoma",
    "Times New Roman",
    "Trebuchet MS",
    "Ubuntu",
    "Verdana",
    "Webdings",
    "Wingdings",
    "sans-serif",
    "serif",
    "monospace",
];

const DEFAULT_FILE_EXTENSIONS: &[&str] = &[
    "7z", "avi", "bak", "bat", "bin", "bmp", "bz2", "c", "cfg", "conf", "cpp", "cs", "csv",
    "cur", "dat", "db", "dll", "dmg", "doc", "docx", "dta", "dtd", "dylib", "epub", "exe",
    "flac", "frag", "gif", "glsl", "gz", "h", "hlsl", "hpp", "htm", "html", "ico", "ini", "iso",
    "jar", "java", "jpeg", "jpg", "js", "json", "lib", "lnk", "log", "lua", "md", "mkv", "mo",
    "mov", "mp3", "mp4", "msi", "odt", "ods", "ogg", "otf", "pdf", "php", "pl", "png", "po",
    "pot", "ppt", "pptx", "ps1", "py", "qml", "rar", "rb", "rc", "rtf", "sav", "sh", "shader",
    "so", "sql", "sqlite", "svg", "tar", "tex", "tif", "tiff", "tmp", "ttf", "txt", "vert",
    "wav", "webp", "woff", "woff2", "xls", "xlsx", "xml", "xsd", "xsl", "xslt", "xz", "yaml",
    "yml", "zip",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("wxString::Format"), "Format");
        assert_eq!(last_segment("Debug.WriteLine"), "WriteLine");
        assert_eq!(last_segment("obj->SetLabel"), "SetLabel");
        assert_eq!(last_segment("plain"), "plain");
    }

    #[test]
    fn test_qualified_suffixes() {
        let suffixes: Vec<_> = qualified_suffixes("System.Diagnostics.Debug.WriteLine").collect();
        assert_eq!(
            suffixes,
            [
                "System.Diagnostics.Debug.WriteLine",
                "Diagnostics.Debug.WriteLine",
                "Debug.WriteLine",
                "WriteLine"
            ]
        );
        let suffixes: Vec<_> = qualified_suffixes("ns::obj->Show").collect();
        assert_eq!(suffixes, ["ns::obj->Show", "obj->Show", "Show"]);
    }

    #[test]
    fn test_fully_qualified_internal_function() {
        let h = Heuristics::default();
        assert!(h.is_internal_function("System.Diagnostics.Debug.WriteLine"));
        assert!(h.is_internal_function("Diagnostics.Debug.WriteLine"));
        assert!(!h.is_internal_function("System.Console.WriteLine"));
    }

    #[test]
    fn test_default_lookups() {
        let h = Heuristics::default();
        assert!(h.is_i18n_function("_"));
        assert!(h.is_i18n_function("QObject::tr"));
        assert!(h.is_internal_function("Debug.WriteLine"));
        assert!(!h.is_internal_function("Console.WriteLine"));
        assert!(h.is_wrapper_to_ignore("wxT"));
        assert!(h.is_wrapper_to_ignore("std::wstring"));
        assert!(h.is_variable_type_to_ignore("wxColour"));
        assert!(h.is_exception("std::runtime_error"));
    }

    #[test]
    fn test_ignored_variable_names() {
        let h = Heuristics::default();
        assert!(h.is_ignored_variable_name("m_regexPattern"));
        assert!(h.is_ignored_variable_name("debugMessage"));
        assert!(h.is_ignored_variable_name("self.sqlQuery"));
        assert!(!h.is_ignored_variable_name("errorMessage"));
        assert!(!h.is_ignored_variable_name("label"));
    }

    #[test]
    fn test_deprecated_macros_respect_cpp_version() {
        let h = Heuristics::default();
        assert!(h.deprecated_macro("wxT").is_some());
        assert!(h.deprecated_macro("_T").is_some());

        let old = HeuristicsBuilder::new()
            .options(ClassifierOptions {
                min_cpp_version: 3,
                ..Default::default()
            })
            .build();
        assert!(old.deprecated_macro("wxT").is_some());
        assert!(old.deprecated_macro("_T").is_none());
        // still looked through as a wrapper even when not reported
        assert!(old.is_wrapper_to_ignore("_T"));
    }

    #[test]
    fn test_bad_pattern_is_reported_not_fatal() {
        let mut builder = HeuristicsBuilder::new();
        let err = builder.try_add_ignored_variable_pattern("(unclosed").unwrap_err();
        assert!(err.to_string().contains("(unclosed"));

        let h = HeuristicsBuilder::new()
            .add_ignored_variable_patterns(["(unclosed", "^tmp"])
            .build();
        assert_eq!(h.diagnostics().len(), 1);
        assert!(h.is_ignored_variable_name("tmpValue"));
    }

    #[test]
    fn test_internal_call_depends_on_options() {
        let h = Heuristics::default();
        assert!(!h.is_internal_call("wxLogError"));
        assert!(!h.is_internal_call("runtime_error"));
        assert!(h.is_internal_call("wxLogDebug"));

        let strict = HeuristicsBuilder::new()
            .options(ClassifierOptions {
                log_messages_translatable: false,
                exceptions_translatable: false,
                ..Default::default()
            })
            .build();
        assert!(strict.is_internal_call("wxLogError"));
        assert!(strict.is_internal_call("std::runtime_error"));
    }

    #[test]
    fn test_file_name_regex_built_from_extensions() {
        let h = HeuristicsBuilder::new().add_file_extensions([".xyz"]).build();
        let re = h.file_name_regex.as_ref().unwrap();
        assert!(re.is_match("image.bmp"));
        assert!(re.is_match("data.XYZ"));
        assert!(re.is_match("*.png"));
        assert!(!re.is_match("open the image.bmp"));
    }
}
