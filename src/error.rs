use thiserror::Error;

use crate::{
    actions::CliActionError, api::ApiError, auth::AuthError,
    configuration::ConfigurationError, exit_codes::AmdmExitCode, setup::SetupError,
};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or saving
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    /// First-run setup or credential check could not finish
    #[error("{0}")]
    SetupError(#[from] SetupError),
    /// The API client could not be created
    #[error("{0}")]
    ClientError(#[from] ApiError),
    #[error("{0}")]
    AuthError(#[from] AuthError),
    #[error("{0}")]
    ActionError(#[from] CliActionError),
}

impl CliError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> AmdmExitCode {
        AmdmExitCode::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::ResolutionError;

    #[test]
    fn every_error_exits_with_failure() {
        let errors = [
            CliError::UnsupportedSubcommand("nope".to_string()),
            CliError::SetupError(SetupError::Aborted("closed".to_string())),
            CliError::ActionError(CliActionError::ResolutionError(
                ResolutionError::MissingScope,
            )),
        ];
        for error in errors {
            assert_eq!(error.exit_code().code(), 1);
        }
    }

    #[test]
    fn action_errors_are_shown_unchanged() {
        let error = CliError::from(CliActionError::ResolutionError(ResolutionError::MissingScope));
        assert!(error.to_string().starts_with("Please use '--enterprise-name'"));
    }
}
