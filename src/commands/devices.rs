//! Device command definitions.

use crate::commands::params::{
    duration_parameter, enterprise_name_parameter, name_parameter, save_parameter,
    text_parameter, COMMAND_CLEAR_APP_DATA, COMMAND_DELETE, COMMAND_DEVICES, COMMAND_GET,
    COMMAND_LIST, COMMAND_LOCK, COMMAND_REBOOT, COMMAND_RELINQUISH_OWNERSHIP,
    COMMAND_RESET_PASSWORD, COMMAND_START_LOST_MODE, COMMAND_STOP_LOST_MODE, COMMAND_UPDATE,
    DEVICE_STATES, PARAMETER_EMAIL_ADDRESS, PARAMETER_LOCK_NOW, PARAMETER_MESSAGE,
    PARAMETER_NEW_PASSWORD, PARAMETER_NO_CREDENTIALS_ON_BOOT, PARAMETER_ORGANIZATION,
    PARAMETER_PACKAGE, PARAMETER_PHONE_NUMBER, PARAMETER_POLICY_NAME, PARAMETER_REQUIRE_ENTRY,
    PARAMETER_STATE, PARAMETER_STREET_ADDRESS,
};
use crate::validation;
use clap::{Arg, ArgAction, ArgGroup, Command};

const DEVICE_NAME_HELP: &str =
    "Name (ID) of the device. Run 'devices list' command to get name (ID) of the device.";

/// A device subcommand that targets one device by `--name`.
fn device_subcommand(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(name_parameter(DEVICE_NAME_HELP))
        .arg(enterprise_name_parameter())
}

/// Create the devices command with all its subcommands.
pub fn devices_command() -> Command {
    Command::new(COMMAND_DEVICES)
        .about("Manage Android devices enrolled to your Android Enterprise.")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List devices enrolled to your Android Enterprise.")
                .visible_alias("ls")
                .arg(enterprise_name_parameter()),
        )
        .subcommand(
            device_subcommand(COMMAND_GET, "Get device details.").arg(save_parameter()),
        )
        .subcommand(
            device_subcommand(COMMAND_UPDATE, "Update device policy and state.")
                .arg(
                    Arg::new(PARAMETER_POLICY_NAME)
                        .short('p')
                        .long(PARAMETER_POLICY_NAME)
                        .num_args(1)
                        .help("ID of the policy to enforce on the device. Run 'policies list' command to get IDs of the policies.")
                        .value_parser(validation::resource_id),
                )
                .arg(
                    Arg::new(PARAMETER_STATE)
                        .short('s')
                        .long(PARAMETER_STATE)
                        .num_args(1)
                        .help("New device state")
                        .value_parser(DEVICE_STATES),
                )
                .group(
                    ArgGroup::new("changes")
                        .args([PARAMETER_POLICY_NAME, PARAMETER_STATE])
                        .required(true)
                        .multiple(true),
                ),
        )
        .subcommand(device_subcommand(
            COMMAND_DELETE,
            "Delete (unenroll) a device from your Android Enterprise.",
        ))
        .subcommand(
            device_subcommand(COMMAND_RESET_PASSWORD, "Reset the device password.")
                .arg(text_parameter(
                    PARAMETER_NEW_PASSWORD,
                    "New password. Leave out to clear the password.",
                ))
                .arg(
                    Arg::new(PARAMETER_REQUIRE_ENTRY)
                        .long(PARAMETER_REQUIRE_ENTRY)
                        .action(ArgAction::SetTrue)
                        .help("Don't allow other admins to change the password again until the user has entered it"),
                )
                .arg(
                    Arg::new(PARAMETER_NO_CREDENTIALS_ON_BOOT)
                        .long(PARAMETER_NO_CREDENTIALS_ON_BOOT)
                        .action(ArgAction::SetTrue)
                        .help("Don't ask for user credentials on device boot"),
                )
                .arg(
                    Arg::new(PARAMETER_LOCK_NOW)
                        .long(PARAMETER_LOCK_NOW)
                        .action(ArgAction::SetTrue)
                        .help("Lock the device after the password reset"),
                ),
        )
        .subcommand(device_subcommand(COMMAND_REBOOT, "Reboot the device."))
        .subcommand(
            device_subcommand(COMMAND_LOCK, "Lock the device, as if the lock screen timeout had expired.")
                .arg(duration_parameter("How long the lock command stays valid")),
        )
        .subcommand(device_subcommand(
            COMMAND_RELINQUISH_OWNERSHIP,
            "Remove the work profile and all policies from a company-owned device.",
        ))
        .subcommand(
            device_subcommand(COMMAND_CLEAR_APP_DATA, "Clear the data of the given apps.").arg(
                Arg::new(PARAMETER_PACKAGE)
                    .long(PARAMETER_PACKAGE)
                    .num_args(1)
                    .required(true)
                    .action(ArgAction::Append)
                    .help("Package name of an app to clear, may be repeated")
                    .value_parser(validation::resource_id),
            ),
        )
        .subcommand(
            device_subcommand(COMMAND_START_LOST_MODE, "Put the device into lost mode.")
                .arg(text_parameter(PARAMETER_MESSAGE, "Message shown on the lost device").required(true))
                .arg(text_parameter(PARAMETER_PHONE_NUMBER, "Phone number to call the owner"))
                .arg(text_parameter(PARAMETER_EMAIL_ADDRESS, "Email address of the owner"))
                .arg(text_parameter(PARAMETER_STREET_ADDRESS, "Street address to return the device to"))
                .arg(text_parameter(PARAMETER_ORGANIZATION, "Organization name shown on the device")),
        )
        .subcommand(device_subcommand(
            COMMAND_STOP_LOST_MODE,
            "Take the device out of lost mode.",
        ))
}
