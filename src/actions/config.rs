use crate::{
    actions::CliActionError,
    commands::params::{PARAMETER_ADD, PARAMETER_LIST},
    configuration::Configuration,
    setup::SETUP_STEPS,
};
use clap::ArgMatches;
use color_print::cwriteln;
use std::{io::Write, path::Path};
use tracing::debug;

/// Checks a reserved key the same way the setup prompts do and returns the
/// value to store. Other keys are stored as given.
fn checked_value(key: &str, value: &str) -> Result<String, CliActionError> {
    match SETUP_STEPS.iter().find(|step| step.key == key) {
        Some(step) => (step.validate)(value)
            .map_err(|message| CliActionError::ValidationError(format!("{}: {}", key, message))),
        None => Ok(value.to_string()),
    }
}

/// Applies every `--add key=value` in order and saves once, then prints the
/// configuration when `--list` is given.
pub fn update_configuration(
    configuration: &mut Configuration,
    configuration_path: &Path,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let additions: Vec<&(String, String)> = matches
        .get_many::<(String, String)>(PARAMETER_ADD)
        .map(|values| values.collect())
        .unwrap_or_default();
    let list = matches.get_flag(PARAMETER_LIST);

    if additions.is_empty() && !list {
        cwriteln!(
            out,
            "<yellow>Nothing to do. Use 'config --add \"key=value\"' to change a value or 'config --list' to print the configuration.</yellow>"
        )?;
        return Ok(());
    }

    if !additions.is_empty() {
        let checked = additions
            .iter()
            .map(|(key, value)| checked_value(key, value).map(|value| (key.as_str(), value)))
            .collect::<Result<Vec<_>, _>>()?;
        for (key, value) in &checked {
            debug!("Setting configuration key {}", key);
            configuration.set(*key, value.as_str());
        }
        configuration.save(configuration_path)?;
        for (key, value) in &checked {
            cwriteln!(out, "<green>Configuration updated:</green> {} = {}", key, value)?;
        }
    }

    if list {
        list_configuration(configuration, configuration_path, out)?;
    }
    Ok(())
}

pub fn list_configuration(
    configuration: &Configuration,
    configuration_path: &Path,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    cwriteln!(out, "<blue>Configuration ({}):</blue>", configuration_path.display())?;
    if configuration.is_empty() {
        writeln!(out, "(empty)")?;
    }
    for (key, value) in configuration.iter() {
        writeln!(out, "{} = {}", key, value)?;
    }
    Ok(())
}
