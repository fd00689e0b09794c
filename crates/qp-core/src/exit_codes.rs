//! Exit codes for the qp CLI.
//!
//! Exit codes communicate run outcome without requiring output parsing.
//! These are a stable contract for automation.

/// Exit codes for qp operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: model trained, every query document scored.
    Clean = 0,

    /// Partial failure: some query documents failed to score.
    PartialFail = 1,

    /// Configuration or usage error.
    ConfigError = 2,

    /// Training failed; no model was produced.
    TrainingError = 3,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Get the code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::PartialFail => "ERR_PARTIAL",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::TrainingError => "ERR_TRAINING",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
