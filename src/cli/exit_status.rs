use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): no error-severity issues (warnings may have been reported)
/// - `Failure` (1): at least one error-severity issue, or `init` refused to
///   overwrite an existing file
/// - `Error` (2): the run itself failed (bad config, bad arguments, I/O)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status of a completed review with `error_count` error-severity issues.
    pub fn from_error_count(error_count: usize) -> Self {
        if error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
