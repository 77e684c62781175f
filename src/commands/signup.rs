//! Signup URL command definition.

use crate::commands::params::COMMAND_CREATE_SIGNUP_URL;
use clap::Command;

pub fn signup_command() -> Command {
    Command::new(COMMAND_CREATE_SIGNUP_URL).about(
        "Create a signup URL for Android Management. Uses 'projectId' and 'callbackUrl' from config.",
    )
}
