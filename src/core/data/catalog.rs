use std::fmt;

/// Whether a catalog entry was flagged as using `printf`-style placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatKind {
    #[default]
    None,
    /// `#, c-format`
    CLike,
}

/// Problem found on a catalog entry by the consistency checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IssueKind {
    /// Placeholder sequence differs between source and translation.
    PrintfMismatch,
    /// Source string looks internal and should not have been exposed.
    SuspectSource,
    /// `&X` accelerator present on only one side.
    AcceleratorMismatch,
    /// Source string contains a URL or email address.
    ContainsUrl,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::PrintfMismatch => write!(f, "printf-mismatch"),
            IssueKind::SuspectSource => write!(f, "suspect-source"),
            IssueKind::AcceleratorMismatch => write!(f, "accelerator-mismatch"),
            IssueKind::ContainsUrl => write!(f, "contains-url"),
        }
    }
}

/// One gettext translation unit (`msgid`/`msgstr`, optionally plural).
///
/// Owned by the catalog review; the consistency checker appends to `issues`
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogEntry {
    pub file_path: String,
    /// Line of the `msgid` keyword (1-indexed).
    pub line: usize,
    pub context: Option<String>,
    pub source: String,
    pub source_plural: Option<String>,
    pub translation: String,
    pub translation_plural: Option<String>,
    pub format_kind: FormatKind,
    pub fuzzy: bool,
    pub issues: Vec<(IssueKind, String)>,
}

impl CatalogEntry {
    pub fn is_plural(&self) -> bool {
        self.source_plural.is_some()
    }

    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|(k, _)| *k == kind)
    }

    pub fn issue_count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|(k, _)| *k == kind).count()
    }
}
