//! Configuration command definitions.

use crate::{
    commands::params::{COMMAND_CONFIG, PARAMETER_ADD, PARAMETER_LIST},
    validation,
};
use clap::{Arg, ArgAction, Command};

/// Create the config command.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Update configuration for the CLI tool.")
        .arg(
            Arg::new(PARAMETER_ADD)
                .short('a')
                .long(PARAMETER_ADD)
                .value_name("KEY=VALUE")
                .action(ArgAction::Append)
                .help("Add a key-value pair to the config file (e.g. \"defaultEnterprise=enterprises/LC01ro7nu8\")")
                .value_parser(validation::key_value),
        )
        .arg(
            Arg::new(PARAMETER_LIST)
                .short('l')
                .long(PARAMETER_LIST)
                .action(ArgAction::SetTrue)
                .help("Print the current configuration"),
        )
}
