//! Enterprise command definitions.

use crate::commands::params::{
    enterprise_name_parameter, json_file_parameter, save_parameter, COMMAND_BIND,
    COMMAND_DELETE, COMMAND_ENTERPRISES, COMMAND_GET, COMMAND_LIST, COMMAND_PATCH,
    PARAMETER_ENTERPRISE_TOKEN, PARAMETER_SET_DEFAULT, PARAMETER_SIGNUP_URL_NAME,
    PARAMETER_UPDATE_MASK,
};
use crate::validation;
use clap::{Arg, ArgAction, Command};

/// Create the enterprises command with all its subcommands.
pub fn enterprises_command() -> Command {
    Command::new(COMMAND_ENTERPRISES)
        .about("Manage Android Enterprises bound to your Google Cloud project.")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_BIND)
                .about("Bind registered Android Enterprise to your Google Cloud project. Prompts for missing values.")
                .arg(
                    Arg::new(PARAMETER_SIGNUP_URL_NAME)
                        .long(PARAMETER_SIGNUP_URL_NAME)
                        .num_args(1)
                        .help("Signup URL name from 'create-signup-url' command")
                        .value_parser(|input: &str| validation::non_empty(input, "Signup URL name")),
                )
                .arg(
                    Arg::new(PARAMETER_ENTERPRISE_TOKEN)
                        .long(PARAMETER_ENTERPRISE_TOKEN)
                        .num_args(1)
                        .help("Enterprise token from the callback URL")
                        .value_parser(|input: &str| validation::non_empty(input, "Enterprise token")),
                )
                .arg(
                    Arg::new(PARAMETER_SET_DEFAULT)
                        .long(PARAMETER_SET_DEFAULT)
                        .action(ArgAction::SetTrue)
                        .help("Store the new enterprise as 'defaultEnterprise' in config"),
                ),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List Android Enterprises bound to your Google Cloud project.")
                .visible_alias("ls"),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get Android Enterprise details.")
                .arg(enterprise_name_parameter())
                .arg(save_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_PATCH)
                .about("Update Android Enterprise settings from a JSON file.")
                .arg(json_file_parameter("Path to the enterprise JSON file"))
                .arg(
                    Arg::new(PARAMETER_UPDATE_MASK)
                        .long(PARAMETER_UPDATE_MASK)
                        .num_args(1)
                        .help("Comma-separated list of fields to update, e.g. enterpriseDisplayName,primaryColor")
                        .value_parser(validation::resource_id),
                )
                .arg(enterprise_name_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete an Android Enterprise. This can't be undone.")
                .arg(enterprise_name_parameter()),
        )
}
