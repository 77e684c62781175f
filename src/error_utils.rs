//! Error reporting utilities for the amdm application.
//!
//! Every failure ends the same way: one message on stderr and exit code 1.
//! The remote failures get a hint for the most common causes.

use crate::{actions::CliActionError, error::CliError};
use color_print::ceprintln;
use tracing::debug;

/// Hint for a remote failure, based on the HTTP status the server returned.
pub fn remote_hint(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("Authentication failed. Check that the service account key in your config is valid."),
        403 => Some("Access forbidden. Check that the service account has the Android Management User role in the project."),
        404 => Some("Resource not found. Check the name (ID) and the enterprise you are using."),
        _ => None,
    }
}

fn status_of(error: &CliError) -> Option<u16> {
    match error {
        CliError::ActionError(CliActionError::RemoteError { source, .. }) => source.status(),
        CliError::ClientError(source) => source.status(),
        _ => None,
    }
}

/// Prints `error` to stderr, followed by a hint when one applies.
pub fn report_error(error: &CliError) {
    debug!("Command failed: {:?}", error);
    ceprintln!("<red>{}</red>", error);
    if let Some(hint) = status_of(error).and_then(remote_hint) {
        eprintln!("{}", hint);
    }
}
