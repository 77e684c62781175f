//! CLI command definitions and argument parsing.
//!
//! Every command group is declared in its own submodule as a clap `Command`
//! table: subcommands, their flags, which flags are required and which value
//! parsers validate them. [`cli_command`] assembles the full tree.

use clap::Command;

pub mod config;
pub mod devices;
pub mod enrollment_tokens;
pub mod enterprises;
pub mod operations;
pub mod params;
pub mod policies;
pub mod signup;

pub use params::{
    COMMAND_CONFIG, COMMAND_CREATE_SIGNUP_URL, COMMAND_DEVICES, COMMAND_ENROLLMENT_TOKENS,
    COMMAND_ENTERPRISES, COMMAND_OPERATIONS, COMMAND_POLICIES, PARAMETER_VERBOSE,
};

/// Create and configure all CLI commands and their arguments.
pub fn cli_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::verbose_parameter())
        .subcommand(signup::signup_command())
        .subcommand(enterprises::enterprises_command())
        .subcommand(config::config_command())
        .subcommand(policies::policies_command())
        .subcommand(enrollment_tokens::enrollment_tokens_command())
        .subcommand(devices::devices_command())
        .subcommand(operations::operations_command())
}
