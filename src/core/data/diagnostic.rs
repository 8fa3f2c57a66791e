use std::fmt;

/// A non-fatal parser warning (unterminated comment, bad user pattern, ...).
///
/// Diagnostics never stop a scan. They are logged through `tracing` when
/// recorded and only surface to the user in verbose mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// Short machine-friendly subject, e.g. `unterminated-comment`.
    pub subject: String,
    pub message: String,
}

impl DiagnosticMessage {
    pub fn new(
        file_path: impl Into<String>,
        line: usize,
        col: usize,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let diagnostic = Self {
            file_path: file_path.into(),
            line,
            col,
            subject: subject.into(),
            message: message.into(),
        };
        tracing::warn!("{}", diagnostic);
        diagnostic
    }

    /// A diagnostic that is not tied to a file position (configuration).
    pub fn global(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(String::new(), 0, 0, subject, message)
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file_path.is_empty() {
            write!(f, "[{}] {}", self.subject, self.message)
        } else {
            write!(
                f,
                "{}:{}:{}: [{}] {}",
                self.file_path, self.line, self.col, self.subject, self.message
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = DiagnosticMessage::new("a.cpp", 3, 7, "unterminated-comment", "no closing */");
        assert_eq!(
            d.to_string(),
            "a.cpp:3:7: [unterminated-comment] no closing */"
        );
        let g = DiagnosticMessage::global("bad-pattern", "unclosed group");
        assert_eq!(g.to_string(), "[bad-pattern] unclosed group");
    }
}
