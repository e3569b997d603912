//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   failure modes.
//! - Map `LoadError` categories to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Zero means success; file-level and parse-level failures get distinct
//!   non-zero codes.

use envfile::LoadError;

/// Structured exit codes for the `envfile` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The file loaded and printed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// The `.env` file is missing or unreadable at the resolved path.
    FileUnavailable = 2,

    /// The `.env` file was read but failed to parse.
    ParseFailed = 3,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Extension trait mapping errors to exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        match self.downcast_ref::<LoadError>() {
            Some(LoadError::File(_)) => ExitCode::FileUnavailable,
            Some(LoadError::Parse(_)) => ExitCode::ParseFailed,
            None => ExitCode::GeneralError,
        }
    }
}
