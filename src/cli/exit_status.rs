use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, nothing to report
/// - `Failure` (1): Command completed but found missing/unused keys or rejected a key
/// - `Error` (2): Command failed (unreadable file, bad JSON, write error, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing to report.
    Success,
    /// Command completed with findings, or refused to overwrite a key.
    Failure,
    /// Command failed due to an I/O, parse or configuration error.
    Error,
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
