use std::process::ExitCode;

/// Exit status for a scan run, following common conventions for linter tools.
///
/// - `Success` (0): Scan completed, every checked file has full key coverage
/// - `Failure` (1): Scan directory missing, or at least one checked file omits a key
/// - `Error` (2): Scan aborted (unreadable file, parse error, invalid config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed, every checked file has full key coverage.
    Success,
    /// Scan directory missing, or at least one checked file omits a key.
    Failure,
    /// Scan aborted (unreadable file, parse error, invalid config).
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
