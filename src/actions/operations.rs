use crate::{
    actions::{
        enterprises::report_saved, required_string, ActionContext, CliActionError, RemoteContext,
    },
    commands::params::{PARAMETER_DEVICE, PARAMETER_ID, PARAMETER_SAVE},
    format::{self, NO_OPERATIONS_MESSAGE},
    resolution,
};
use clap::ArgMatches;
use color_print::cwriteln;
use std::io::Write;

pub async fn list_operations(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let device = required_string(matches, PARAMETER_DEVICE)?;
    let parent = resolution::operations_parent(&enterprise, device);

    let response = context
        .api
        .list_operations(&parent)
        .await
        .context("get operations")?;

    writeln!(out)?;
    if !response.operations.is_empty() {
        cwriteln!(out, "<blue>Operations queued on {} device:</blue>", device)?;
        writeln!(out)?;
    }
    writeln!(out, "{}", format::summary(&response.operations, NO_OPERATIONS_MESSAGE))?;
    Ok(())
}

pub async fn get_operation(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let device = required_string(matches, PARAMETER_DEVICE)?;
    let id = required_string(matches, PARAMETER_ID)?;
    let name = resolution::operation_name(&enterprise, device, id);

    let operation = context
        .api
        .get_operation(&name)
        .await
        .context("get operation")?;

    writeln!(out)?;
    cwriteln!(out, "<blue>'{}' operation details:</blue>", id)?;
    writeln!(out)?;
    writeln!(out, "{}", format::details(&operation))?;

    if matches.get_flag(PARAMETER_SAVE) {
        let path = format::save_details(&operation, &name, context.output_dir)?;
        report_saved(out, "operation", &path)?;
    }
    Ok(())
}

pub async fn cancel_operation(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let device = required_string(matches, PARAMETER_DEVICE)?;
    let id = required_string(matches, PARAMETER_ID)?;
    let name = resolution::operation_name(&enterprise, device, id);

    context
        .api
        .cancel_operation(&name)
        .await
        .context("cancel operation")?;

    writeln!(out)?;
    cwriteln!(out, "<green>'{}' operation successfully canceled.</green>", id)?;
    Ok(())
}
