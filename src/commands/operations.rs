//! Operation command definitions.

use crate::commands::params::{
    device_parameter, enterprise_name_parameter, operation_id_parameter, save_parameter,
    COMMAND_CANCEL, COMMAND_GET, COMMAND_LIST, COMMAND_OPERATIONS,
};
use clap::Command;

/// Create the operations command with all its subcommands.
pub fn operations_command() -> Command {
    Command::new(COMMAND_OPERATIONS)
        .about("Manage operations queued in your Android Enterprise.")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List operations queued for a device.")
                .visible_alias("ls")
                .arg(device_parameter())
                .arg(enterprise_name_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get operation details. Run 'operations list' command to get ID of the operation.")
                .arg(device_parameter())
                .arg(operation_id_parameter())
                .arg(enterprise_name_parameter())
                .arg(save_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CANCEL)
                .about("Cancel an operation queued for a device.")
                .arg(device_parameter())
                .arg(operation_id_parameter())
                .arg(enterprise_name_parameter()),
        )
}
