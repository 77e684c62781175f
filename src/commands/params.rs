//! Shared command parameters for all CLI commands.
//!
//! Parameter names live here together with the argument builders that more
//! than one command group uses. Validators run as clap value parsers, so a bad
//! value is rejected before any handler runs.

use crate::validation;
use clap::{value_parser, Arg, ArgAction};

// Top-level commands
pub const COMMAND_CREATE_SIGNUP_URL: &str = "create-signup-url";
pub const COMMAND_ENTERPRISES: &str = "enterprises";
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_POLICIES: &str = "policies";
pub const COMMAND_ENROLLMENT_TOKENS: &str = "enrollment-tokens";
pub const COMMAND_DEVICES: &str = "devices";
pub const COMMAND_OPERATIONS: &str = "operations";

// CRUD operations
pub const COMMAND_ADD: &str = "add";
pub const COMMAND_BIND: &str = "bind";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_PATCH: &str = "patch";
pub const COMMAND_UPDATE: &str = "update";
pub const COMMAND_DELETE: &str = "delete";
pub const COMMAND_CANCEL: &str = "cancel";

// Device commands
pub const COMMAND_RESET_PASSWORD: &str = "reset-password";
pub const COMMAND_REBOOT: &str = "reboot";
pub const COMMAND_LOCK: &str = "lock";
pub const COMMAND_RELINQUISH_OWNERSHIP: &str = "relinquish-ownership";
pub const COMMAND_CLEAR_APP_DATA: &str = "clear-app-data";
pub const COMMAND_START_LOST_MODE: &str = "start-lost-mode";
pub const COMMAND_STOP_LOST_MODE: &str = "stop-lost-mode";

// Parameter names
pub const PARAMETER_VERBOSE: &str = "verbose";
pub const PARAMETER_ENTERPRISE_NAME: &str = "enterprise-name";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_ID: &str = "id";
pub const PARAMETER_DEVICE: &str = "device";
pub const PARAMETER_FILE: &str = "file";
pub const PARAMETER_SAVE: &str = "save";
pub const PARAMETER_ADD: &str = "add";
pub const PARAMETER_LIST: &str = "list";
pub const PARAMETER_UPDATE_MASK: &str = "update-mask";
pub const PARAMETER_SIGNUP_URL_NAME: &str = "signup-url-name";
pub const PARAMETER_ENTERPRISE_TOKEN: &str = "enterprise-token";
pub const PARAMETER_SET_DEFAULT: &str = "set-default";
pub const PARAMETER_POLICY_NAME: &str = "policy-name";
pub const PARAMETER_STATE: &str = "state";
pub const PARAMETER_BYOD: &str = "byod";
pub const PARAMETER_DURATION: &str = "duration";
pub const PARAMETER_ONE_TIME_ONLY: &str = "one-time-only";
pub const PARAMETER_NEW_PASSWORD: &str = "new-password";
pub const PARAMETER_REQUIRE_ENTRY: &str = "require-entry";
pub const PARAMETER_LOCK_NOW: &str = "lock-now";
pub const PARAMETER_NO_CREDENTIALS_ON_BOOT: &str = "no-credentials-on-boot";
pub const PARAMETER_PACKAGE: &str = "package";
pub const PARAMETER_MESSAGE: &str = "message";
pub const PARAMETER_PHONE_NUMBER: &str = "phone-number";
pub const PARAMETER_EMAIL_ADDRESS: &str = "email-address";
pub const PARAMETER_STREET_ADDRESS: &str = "street-address";
pub const PARAMETER_ORGANIZATION: &str = "organization";

pub const DEFAULT_POLICY_ID: &str = "default";
pub const DEVICE_STATES: [&str; 2] = ["active", "disabled"];

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose output for debugging")
}

/// `--enterprise-name`, falling back to `defaultEnterprise` from the config.
pub fn enterprise_name_parameter() -> Arg {
    Arg::new(PARAMETER_ENTERPRISE_NAME)
        .short('e')
        .long(PARAMETER_ENTERPRISE_NAME)
        .num_args(1)
        .required(false)
        .value_name("ENTERPRISE_NAME")
        .help("Name of the Android Enterprise, e.g. enterprises/LC01ro7nu8. Skip if 'defaultEnterprise' is set in config.")
}

/// A resource ID that becomes the last segment of a resource name.
pub fn resource_id_parameter(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .num_args(1)
        .required(true)
        .help(help)
        .value_parser(validation::resource_id)
}

pub fn name_parameter(help: &'static str) -> Arg {
    resource_id_parameter(PARAMETER_NAME, 'n', help)
}

pub fn device_parameter() -> Arg {
    resource_id_parameter(
        PARAMETER_DEVICE,
        'd',
        "ID of the device. Run 'devices list' command to get ID of the device.",
    )
}

pub fn operation_id_parameter() -> Arg {
    resource_id_parameter(
        PARAMETER_ID,
        'i',
        "ID of the operation. Run 'operations list' command to get ID of the operation.",
    )
}

pub fn save_parameter() -> Arg {
    Arg::new(PARAMETER_SAVE)
        .long(PARAMETER_SAVE)
        .action(ArgAction::SetTrue)
        .help("Save the full response to a JSON file in the current directory")
}

/// A required request body file. Only its existence is checked here; the
/// handler parses it once every other flag has been accepted.
pub fn json_file_parameter(help: &'static str) -> Arg {
    Arg::new(PARAMETER_FILE)
        .short('f')
        .long(PARAMETER_FILE)
        .num_args(1)
        .required(true)
        .value_name("FILE_PATH")
        .help(help)
        .value_parser(validation::existing_file)
}

pub fn duration_parameter(help: &'static str) -> Arg {
    Arg::new(PARAMETER_DURATION)
        .long(PARAMETER_DURATION)
        .num_args(1)
        .value_name("SECONDS")
        .help(help)
        .value_parser(value_parser!(u64).range(1..))
}

pub fn text_parameter(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .num_args(1)
        .help(help)
        .value_parser(|input: &str| validation::non_empty(input, "Value"))
}
