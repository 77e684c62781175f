//! Command handlers.
//!
//! One submodule per command group. A handler reads its flags from the
//! `ArgMatches` of its subcommand, resolves the enterprise scope when the
//! command is scoped, performs a single call on the [`ManagementApi`] and
//! writes the rendered result to `out`.

use crate::{
    api::{ApiError, ManagementApi},
    configuration::{Configuration, ConfigurationError},
    format::FormattingError,
    resolution::{self, ResolutionError},
    setup::SetupError,
};
use clap::ArgMatches;
use std::path::Path;
use thiserror::Error;

pub mod config;
pub mod devices;
pub mod enrollment_tokens;
pub mod enterprises;
pub mod operations;
pub mod policies;
pub mod signup;

#[derive(Debug, Error)]
pub enum CliActionError {
    #[error("Couldn't {action}: {source}")]
    RemoteError {
        action: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("{0}")]
    ResolutionError(#[from] ResolutionError),

    #[error("{0}")]
    ConfigurationError(#[from] ConfigurationError),

    #[error("{0}")]
    SetupError(#[from] SetupError),

    #[error("{0}")]
    FormattingError(#[from] FormattingError),

    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Attaches the failed action to a remote error, e.g. "Couldn't get devices".
pub trait RemoteContext<T> {
    fn context(self, action: &'static str) -> Result<T, CliActionError>;
}

impl<T> RemoteContext<T> for Result<T, ApiError> {
    fn context(self, action: &'static str) -> Result<T, CliActionError> {
        self.map_err(|source| CliActionError::RemoteError { action, source })
    }
}

/// What every remote handler works against.
pub struct ActionContext<'a> {
    pub api: &'a dyn ManagementApi,
    pub configuration: &'a Configuration,
    /// Where `--save` writes its files.
    pub output_dir: &'a Path,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        api: &'a dyn ManagementApi,
        configuration: &'a Configuration,
        output_dir: &'a Path,
    ) -> Self {
        ActionContext {
            api,
            configuration,
            output_dir,
        }
    }

    /// The enterprise from `--enterprise-name` or `defaultEnterprise`.
    pub fn enterprise(&self, matches: &ArgMatches) -> Result<String, CliActionError> {
        let explicit = matches
            .try_get_one::<String>(crate::commands::params::PARAMETER_ENTERPRISE_NAME)
            .ok()
            .flatten()
            .map(String::as_str);
        Ok(resolution::resolve_enterprise(explicit, self.configuration)?)
    }

    pub fn project_id(&self) -> Result<&str, CliActionError> {
        Ok(self
            .configuration
            .require(crate::configuration::KEY_PROJECT_ID)?)
    }
}

pub(crate) fn required_string<'m>(
    matches: &'m ArgMatches,
    id: &str,
) -> Result<&'m str, CliActionError> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| CliActionError::MissingRequiredArgument(id.to_string()))
}

pub(crate) fn optional_string<'m>(matches: &'m ArgMatches, id: &str) -> Option<&'m str> {
    matches
        .try_get_one::<String>(id)
        .ok()
        .flatten()
        .map(String::as_str)
}
