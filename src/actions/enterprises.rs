use crate::{
    actions::{optional_string, ActionContext, CliActionError, RemoteContext},
    api::ManagementApi,
    commands::params::{
        PARAMETER_ENTERPRISE_TOKEN, PARAMETER_FILE, PARAMETER_SET_DEFAULT,
        PARAMETER_SIGNUP_URL_NAME, PARAMETER_UPDATE_MASK,
    },
    configuration::{Configuration, KEY_DEFAULT_ENTERPRISE, KEY_PROJECT_ID},
    format::{self, NO_ENTERPRISES_MESSAGE},
    resolution::local_id,
    setup::{self, PromptStep, Prompter},
    validation,
};
use clap::ArgMatches;
use color_print::cwriteln;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

fn validate_signup_url_name(input: &str) -> Result<String, String> {
    validation::non_empty(input, "Signup URL name")
}

fn validate_enterprise_token(input: &str) -> Result<String, String> {
    validation::non_empty(input, "Enterprise token")
}

pub const SIGNUP_URL_NAME_STEP: PromptStep = PromptStep {
    key: PARAMETER_SIGNUP_URL_NAME,
    message: "Enter the signup URL name (from 'create-signup-url'):",
    default: None,
    validate: validate_signup_url_name,
};

pub const ENTERPRISE_TOKEN_STEP: PromptStep = PromptStep {
    key: PARAMETER_ENTERPRISE_TOKEN,
    message: "Enter the enterprise token (the 'enterpriseToken' parameter of the callback URL):",
    default: None,
    validate: validate_enterprise_token,
};

fn flag_or_prompt(
    matches: &ArgMatches,
    prompter: &mut dyn Prompter,
    step: &PromptStep,
) -> Result<String, CliActionError> {
    match optional_string(matches, step.key) {
        Some(value) => Ok(value.to_string()),
        None => Ok(setup::ask(prompter, step)?),
    }
}

/// Creates the enterprise from a completed signup and optionally stores it as
/// the default scope.
pub async fn bind_enterprise(
    api: &dyn ManagementApi,
    configuration: &mut Configuration,
    configuration_path: &Path,
    prompter: &mut dyn Prompter,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let project_id = configuration.require(KEY_PROJECT_ID)?.to_string();
    let signup_url_name = flag_or_prompt(matches, prompter, &SIGNUP_URL_NAME_STEP)?;
    let enterprise_token = flag_or_prompt(matches, prompter, &ENTERPRISE_TOKEN_STEP)?;

    let enterprise = api
        .create_enterprise(&project_id, &signup_url_name, &enterprise_token)
        .await
        .context("bind Android Enterprise")?;

    writeln!(out)?;
    cwriteln!(
        out,
        "<green>Android Enterprise '{}' bound to project '{}'.</green>",
        enterprise.name,
        project_id
    )?;

    if matches.get_flag(PARAMETER_SET_DEFAULT) {
        configuration.set(KEY_DEFAULT_ENTERPRISE, enterprise.name.as_str());
        configuration.save(configuration_path)?;
        writeln!(out, "Configuration updated: {} = {}", KEY_DEFAULT_ENTERPRISE, enterprise.name)?;
    }
    Ok(())
}

pub async fn list_enterprises(
    context: &ActionContext<'_>,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let project_id = context.project_id()?;
    let response = context
        .api
        .list_enterprises(project_id)
        .await
        .context("get enterprises")?;

    writeln!(out)?;
    if !response.enterprises.is_empty() {
        cwriteln!(out, "<blue>Enterprises:</blue>")?;
        writeln!(out)?;
    }
    writeln!(out, "{}", format::summary(&response.enterprises, NO_ENTERPRISES_MESSAGE))?;
    Ok(())
}

pub async fn get_enterprise(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let name = context.enterprise(matches)?;
    let enterprise = context
        .api
        .get_enterprise(&name)
        .await
        .context("get enterprise")?;

    writeln!(out)?;
    cwriteln!(out, "<blue>'{}' enterprise details:</blue>", local_id(&name))?;
    writeln!(out)?;
    writeln!(out, "{}", format::details(&enterprise))?;

    if matches.get_flag(crate::commands::params::PARAMETER_SAVE) {
        let path = format::save_details(&enterprise, &name, context.output_dir)?;
        report_saved(out, "enterprise", &path)?;
    }
    Ok(())
}

pub async fn patch_enterprise(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let name = context.enterprise(matches)?;
    let body = read_json_body(matches)?;
    let update_mask = optional_string(matches, PARAMETER_UPDATE_MASK);
    debug!("Patching {} with update mask {:?}", name, update_mask);

    let enterprise = context
        .api
        .patch_enterprise(&name, &body, update_mask)
        .await
        .context("update enterprise")?;

    writeln!(out)?;
    cwriteln!(out, "<green>'{}' enterprise successfully updated.</green>", enterprise.name)?;
    Ok(())
}

pub async fn delete_enterprise(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let name = context.enterprise(matches)?;
    context
        .api
        .delete_enterprise(&name)
        .await
        .context("delete enterprise")?;

    writeln!(out)?;
    cwriteln!(out, "<green>{} enterprise successfully deleted.</green>", name)?;
    Ok(())
}

/// Parses the `--file` request body.
pub(crate) fn read_json_body(matches: &ArgMatches) -> Result<serde_json::Value, CliActionError> {
    let path = matches
        .get_one::<PathBuf>(PARAMETER_FILE)
        .ok_or_else(|| CliActionError::MissingRequiredArgument(PARAMETER_FILE.to_string()))?;
    validation::json_object_file(path).map_err(CliActionError::ValidationError)
}

pub(crate) fn report_saved(
    out: &mut dyn Write,
    kind: &str,
    path: &Path,
) -> Result<(), CliActionError> {
    cwriteln!(
        out,
        "<green>Full {} details response saved to '{}'</green>",
        kind,
        path.display()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::tests::{configuration_with_default, leaf_matches, output, FakeApi};
    use crate::model::Enterprise;
    use crate::setup::tests::ScriptedPrompter;
    use tempfile::{NamedTempFile, TempDir};

    #[tokio::test]
    async fn bind_prompts_for_missing_values_and_sets_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let api = FakeApi::default();
        let mut configuration = configuration_with_default();
        let mut prompter = ScriptedPrompter::new(["", "signupUrls/C1", "tok-123"]);
        let matches = leaf_matches(&["enterprises", "bind", "--set-default"]);
        let mut out = Vec::new();

        bind_enterprise(&api, &mut configuration, &path, &mut prompter, &matches, &mut out)
            .await
            .unwrap();

        assert_eq!(prompter.rejected.len(), 1);
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].target, "p1");
        assert_eq!(
            calls[0].body,
            Some(serde_json::json!(["signupUrls/C1", "tok-123"]))
        );
        assert_eq!(configuration.default_enterprise(), Some("enterprises/LC0new"));
        let saved = Configuration::load_from_file(&path).unwrap();
        assert_eq!(saved.default_enterprise(), Some("enterprises/LC0new"));
        assert!(output(out).contains("enterprises/LC0new"));
    }

    #[tokio::test]
    async fn bind_uses_flags_without_prompting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let api = FakeApi::default();
        let mut configuration = configuration_with_default();
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let matches = leaf_matches(&[
            "enterprises",
            "bind",
            "--signup-url-name",
            "signupUrls/C2",
            "--enterprise-token",
            "tok",
        ]);

        bind_enterprise(&api, &mut configuration, &path, &mut prompter, &matches, &mut Vec::new())
            .await
            .unwrap();

        assert!(prompter.asked.is_empty());
        assert_eq!(configuration.default_enterprise(), Some("enterprises/E1"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn empty_enterprise_list_prints_advisory() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let mut out = Vec::new();

        list_enterprises(&context, &mut out).await.unwrap();

        assert!(output(out).contains(NO_ENTERPRISES_MESSAGE));
        assert_eq!(api.calls()[0].operation, "list_enterprises");
    }

    #[tokio::test]
    async fn get_saves_details_when_asked() {
        let dir = TempDir::new().unwrap();
        let api = FakeApi {
            enterprises: vec![Enterprise {
                name: "enterprises/E1".to_string(),
                enterprise_display_name: Some("Lisica".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, dir.path());
        let matches = leaf_matches(&["enterprises", "get", "--save"]);
        let mut out = Vec::new();

        get_enterprise(&context, &matches, &mut out).await.unwrap();

        let saved = dir.path().join("E1-enterprise-details.json");
        let content = std::fs::read_to_string(saved).unwrap();
        assert!(content.contains("Lisica"));
        assert!(output(out).contains("Lisica"));
    }

    #[tokio::test]
    async fn patch_passes_body_and_update_mask() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"enterpriseDisplayName": "Renamed"}"#).unwrap();
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&[
            "enterprises",
            "patch",
            "--file",
            file.path().to_str().unwrap(),
            "--update-mask",
            "enterpriseDisplayName",
        ]);

        patch_enterprise(&context, &matches, &mut Vec::new()).await.unwrap();

        let calls = api.calls();
        assert_eq!(calls[0].target, "enterprises/E1");
        let body = calls[0].body.clone().unwrap();
        assert_eq!(body["enterpriseDisplayName"], "Renamed");
        assert_eq!(body["updateMask"], "enterpriseDisplayName");
    }

    #[tokio::test]
    async fn patch_with_non_object_file_makes_no_call() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[1, 2]").unwrap();
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches =
            leaf_matches(&["enterprises", "patch", "--file", file.path().to_str().unwrap()]);

        let error = patch_enterprise(&context, &matches, &mut Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(error, CliActionError::ValidationError(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn delete_failure_is_reported_with_status() {
        let api = FakeApi {
            failure: Some((403, "Caller lacks permission")),
            ..Default::default()
        };
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&["enterprises", "delete"]);

        let error = delete_enterprise(&context, &matches, &mut Vec::new())
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Couldn't delete enterprise: 403: Caller lacks permission"
        );
    }
}
