//! Enrollment token command definitions.

use crate::commands::params::{
    duration_parameter, enterprise_name_parameter, name_parameter, save_parameter,
    COMMAND_ADD, COMMAND_DELETE, COMMAND_ENROLLMENT_TOKENS, COMMAND_GET, COMMAND_LIST,
    DEFAULT_POLICY_ID, PARAMETER_BYOD, PARAMETER_ONE_TIME_ONLY, PARAMETER_POLICY_NAME,
};
use crate::validation;
use clap::{Arg, ArgAction, Command};

/// Create the enrollment-tokens command with all its subcommands.
pub fn enrollment_tokens_command() -> Command {
    Command::new(COMMAND_ENROLLMENT_TOKENS)
        .about("Manage enrollment tokens used to enroll devices to your Android Enterprise.")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_ADD)
                .about("Create an enrollment token and print the enrollment URL.")
                .arg(
                    Arg::new(PARAMETER_POLICY_NAME)
                        .short('p')
                        .long(PARAMETER_POLICY_NAME)
                        .num_args(1)
                        .default_value(DEFAULT_POLICY_ID)
                        .help("ID of the policy applied to devices enrolled with this token")
                        .value_parser(validation::resource_id),
                )
                .arg(
                    Arg::new(PARAMETER_BYOD)
                        .long(PARAMETER_BYOD)
                        .action(ArgAction::SetTrue)
                        .help("Allow enrolling personally owned (BYOD) devices"),
                )
                .arg(duration_parameter("How long the token stays valid"))
                .arg(
                    Arg::new(PARAMETER_ONE_TIME_ONLY)
                        .long(PARAMETER_ONE_TIME_ONLY)
                        .action(ArgAction::SetTrue)
                        .help("Allow the token to be used only once"),
                )
                .arg(enterprise_name_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List active enrollment tokens.")
                .visible_alias("ls")
                .arg(enterprise_name_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get enrollment token details.")
                .arg(name_parameter("ID of the enrollment token."))
                .arg(enterprise_name_parameter())
                .arg(save_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete an enrollment token.")
                .arg(name_parameter("ID of the enrollment token to delete."))
                .arg(enterprise_name_parameter()),
        )
}
