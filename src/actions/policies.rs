use crate::{
    actions::{
        enterprises::{read_json_body, report_saved},
        required_string, ActionContext, CliActionError, RemoteContext,
    },
    commands::params::{PARAMETER_NAME, PARAMETER_SAVE},
    format::{self, NO_POLICIES_MESSAGE},
    resolution,
};
use clap::ArgMatches;
use color_print::cwriteln;
use std::io::Write;
use tracing::debug;

/// Creates or replaces the policy `--name` with the body read from `--file`.
pub async fn patch_policy(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let id = required_string(matches, PARAMETER_NAME)?;
    let body = read_json_body(matches)?;
    let name = resolution::policy_name(&enterprise, id);
    debug!("Patching policy {}", name);

    let policy = context
        .api
        .patch_policy(&name, &body)
        .await
        .context("add/update policy")?;

    writeln!(out)?;
    cwriteln!(out, "<green>'{}' policy successfully added/updated.</green>", id)?;
    writeln!(
        out,
        "Version: {}",
        policy.version.as_deref().unwrap_or(format::NO_VALUE)
    )?;
    Ok(())
}

pub async fn list_policies(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let response = context
        .api
        .list_policies(&enterprise)
        .await
        .context("get policies")?;

    writeln!(out)?;
    if !response.policies.is_empty() {
        cwriteln!(out, "<blue>Policies:</blue>")?;
        writeln!(out)?;
    }
    writeln!(out, "{}", format::summary(&response.policies, NO_POLICIES_MESSAGE))?;
    Ok(())
}

pub async fn get_policy(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let id = required_string(matches, PARAMETER_NAME)?;
    let name = resolution::policy_name(&enterprise, id);

    let policy = context.api.get_policy(&name).await.context("get policy")?;

    writeln!(out)?;
    cwriteln!(out, "<blue>'{}' policy details:</blue>", id)?;
    writeln!(out)?;
    writeln!(out, "{}", format::details(&policy))?;

    if matches.get_flag(PARAMETER_SAVE) {
        let path = format::save_details(&policy, &name, context.output_dir)?;
        report_saved(out, "policy", &path)?;
    }
    Ok(())
}

pub async fn delete_policy(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let id = required_string(matches, PARAMETER_NAME)?;
    let name = resolution::policy_name(&enterprise, id);

    context
        .api
        .delete_policy(&name)
        .await
        .context("delete policy")?;

    writeln!(out)?;
    cwriteln!(out, "<green>{} policy successfully deleted.</green>", id)?;
    Ok(())
}
