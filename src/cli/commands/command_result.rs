use crate::core::ReviewStats;
use crate::issues::Issue;

use super::super::exit_status::ExitStatus;

/// Result of a `check` run.
pub struct CommandResult {
    /// All issues found, sorted by location.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    /// File and string counts for the success line.
    pub stats: ReviewStats,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_error_count(self.error_count)
    }
}
