//! Core module for connection-management operations.
//!
//! This module provides the UI-independent pieces of the tool:
//!
//! - The bulk attach, snapshot export, and graft operations
//! - Exit codes for CLI automation
//! - Output formatting for subcommand results

pub mod operations;
pub mod output;

/// Exit codes for CLI operations.
///
/// These codes are designed for consumption by CI systems and automation
/// tools, providing clear semantics for different outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All operations completed successfully.
    Success = 0,

    /// General error (configuration, network, snapshot, etc.).
    GeneralError = 1,

    /// Some repositories were attached, some failed.
    PartialSuccess = 2,
}

impl ExitCode {
    /// Returns the numeric exit code value.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns a human-readable description of the exit code.
    pub fn description(self) -> &'static str {
        match self {
            ExitCode::Success => "All operations completed successfully",
            ExitCode::GeneralError => "General error occurred",
            ExitCode::PartialSuccess => "Some repositories were attached, some failed",
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
