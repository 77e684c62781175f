//! Policy command definitions.

use crate::commands::params::{
    enterprise_name_parameter, json_file_parameter, name_parameter, save_parameter,
    COMMAND_DELETE, COMMAND_GET, COMMAND_LIST, COMMAND_PATCH, COMMAND_POLICIES, PARAMETER_ID,
};
use clap::{Arg, Command};

/// `-n/--name`, also accepted as `-i/--id`.
fn policy_id_parameter(help: &'static str) -> Arg {
    name_parameter(help)
        .visible_alias(PARAMETER_ID)
        .visible_short_alias('i')
}

/// Create the policies command with all its subcommands.
pub fn policies_command() -> Command {
    Command::new(COMMAND_POLICIES)
        .about("Manage Android policies.")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_PATCH)
                .about("Add/update a policy.")
                .arg(policy_id_parameter(
                    "ID of the policy, to reference in enrollment token or when adding to a device.",
                ))
                .arg(json_file_parameter("Path to the policy JSON file"))
                .arg(enterprise_name_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List policies available in your Android Enterprise.")
                .visible_alias("ls")
                .arg(enterprise_name_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get policy details. Run 'policies list' command to get ID of the policy.")
                .arg(policy_id_parameter("ID of the policy to get details."))
                .arg(enterprise_name_parameter())
                .arg(save_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete policy from your Android Enterprise. Run 'policies list' command to get ID of the policy.")
                .arg(policy_id_parameter("ID of the policy to delete."))
                .arg(enterprise_name_parameter()),
        )
}
