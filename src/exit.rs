// src/exit.rs
//! Standardized process exit codes for `ctrf`.
//!
//! Provides a stable contract for scripts and CI pipelines. Every
//! subcommand maps its outcome through this enum; no logic calls
//! `process::exit` directly.

use crate::error::CtrfError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CtrfExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, wrong path kind, bad filter).
    Error = 1,
    /// Report decoded but failed structural validation.
    ValidationFailed = 2,
    /// Supplied file or directory does not exist.
    PathNotFound = 3,
    /// Input could not be decoded as a CTRF report at all.
    InvalidReport = 4,
    /// No usable CTRF reports remained after filtering a directory.
    NoReports = 5,
}

impl CtrfExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for CtrfExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&CtrfError> for CtrfExit {
    fn from(err: &CtrfError) -> Self {
        match err {
            CtrfError::PathNotFound(_) => Self::PathNotFound,
            CtrfError::Malformed { .. } => Self::InvalidReport,
            CtrfError::NoUsableReports(_) => Self::NoReports,
            CtrfError::NotADirectory(_)
            | CtrfError::NotAFile(_)
            | CtrfError::InvalidFilter(_)
            | CtrfError::Io { .. }
            | CtrfError::Encode(_)
            | CtrfError::Regex(_) => Self::Error,
        }
    }
}
