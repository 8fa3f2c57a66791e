use super::record::SourceLocation;

/// Kind of a position-only finding, i.e. one that is not about a string's
/// translatability but about how the surrounding text is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// A legacy string-wrapping macro (`wxT`, `_T`, ...).
    DeprecatedMacro {
        name: String,
        suggestion: String,
    },
    /// A `//` comment with no space after the marker.
    SpaceAfterComment,
    TrailingSpaces,
    Tab,
    /// Line longer than the configured maximum.
    WideLine { length: usize },
    /// `;}` with nothing in between.
    StraySemicolonBrace,
    /// Raw non-ASCII character inside a C-family string literal.
    UnencodedExtAscii { character: char },
    /// Dialog font size outside of the standard range.
    FontSize { size: u32 },
    /// Dialog font that is not the standard system dialog font.
    FontName,
}

/// A position-only finding. `value` is what gets reproduced in the report:
/// the macro call, the offending (left-trimmed) line, the font name, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub location: SourceLocation,
    pub value: String,
    pub source_line: String,
}

impl Finding {
    pub fn new(
        kind: FindingKind,
        location: SourceLocation,
        value: impl Into<String>,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            location,
            value: value.into(),
            source_line: source_line.into(),
        }
    }
}
