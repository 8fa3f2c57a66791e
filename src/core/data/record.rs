use std::fmt;

/// Position of something found in a scanned file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    /// Path of the scanned file, as handed to the scanner.
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in chars).
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// The programmatic context a string literal appears in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsageInfo {
    /// Argument of a function call or constructor: `MessageBox("...")`.
    Function { name: String },
    /// Right-hand side of an assignment or `#define`: `label = "..."`.
    Variable {
        name: String,
        declared_type: String,
    },
    /// No resolvable context: comparisons, `return "..."`, stream inserts.
    Orphan,
}

impl UsageInfo {
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function { name: name.into() }
    }

    pub fn variable(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self::Variable {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            UsageInfo::Function { name } | UsageInfo::Variable { name, .. } => Some(name),
            UsageInfo::Orphan => None,
        }
    }
}

impl fmt::Display for UsageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageInfo::Function { name } => write!(f, "function '{}'", name),
            UsageInfo::Variable {
                name,
                declared_type,
            } if declared_type.is_empty() => write!(f, "variable '{}'", name),
            UsageInfo::Variable {
                name,
                declared_type,
            } => write!(f, "variable '{}' ({})", name, declared_type),
            UsageInfo::Orphan => write!(f, "no function or variable context"),
        }
    }
}

/// A string literal found in source, with the context it was used in.
///
/// Immutable once created; the rules clone records into whichever result
/// bucket they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRecord {
    /// The literal's content (adjacent literals already joined).
    pub text: String,
    pub usage: UsageInfo,
    pub location: SourceLocation,
    /// The full source line the literal starts on, for report context.
    pub source_line: String,
}

impl StringRecord {
    pub fn new(
        text: impl Into<String>,
        usage: UsageInfo,
        location: SourceLocation,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            usage,
            location,
            source_line: source_line.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
