//! Exit codes of the amdm application.
//!
//! Scripts only need to tell success from failure, so every error maps to
//! the same code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmdmExitCode {
    /// Success (0) - Command completed successfully
    Success = 0,

    /// Failure (1) - Usage error, invalid configuration, aborted setup or a
    /// failed remote call
    Failure = 1,
}

impl AmdmExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<AmdmExitCode> for i32 {
    fn from(code: AmdmExitCode) -> Self {
        code.code()
    }
}
