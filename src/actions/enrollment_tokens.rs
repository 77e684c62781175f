use crate::{
    actions::{
        enterprises::report_saved, required_string, ActionContext, CliActionError, RemoteContext,
    },
    commands::params::{
        DEFAULT_POLICY_ID, PARAMETER_BYOD, PARAMETER_DURATION, PARAMETER_NAME,
        PARAMETER_ONE_TIME_ONLY, PARAMETER_POLICY_NAME, PARAMETER_SAVE,
    },
    format::{self, NO_ENROLLMENT_TOKENS_MESSAGE},
    model::{duration_string, EnrollmentToken},
    resolution,
};
use clap::ArgMatches;
use color_print::cwriteln;
use std::io::Write;

pub const ENROLLMENT_URL_PREFIX: &str = "https://enterprise.google.com/android/enroll?et=";
pub const PERSONAL_USAGE_ALLOWED: &str = "PERSONAL_USAGE_ALLOWED";

pub fn enrollment_url(token_value: &str) -> String {
    format!("{}{}", ENROLLMENT_URL_PREFIX, token_value)
}

/// Request body for `enrollment-tokens add`.
fn token_request(enterprise: &str, matches: &ArgMatches) -> EnrollmentToken {
    let policy_id = matches
        .get_one::<String>(PARAMETER_POLICY_NAME)
        .map(String::as_str)
        .unwrap_or(DEFAULT_POLICY_ID);

    EnrollmentToken {
        policy_name: Some(resolution::policy_name(enterprise, policy_id)),
        allow_personal_usage: matches
            .get_flag(PARAMETER_BYOD)
            .then(|| PERSONAL_USAGE_ALLOWED.to_string()),
        duration: matches
            .get_one::<u64>(PARAMETER_DURATION)
            .map(|seconds| duration_string(*seconds)),
        one_time_only: matches.get_flag(PARAMETER_ONE_TIME_ONLY).then_some(true),
        ..Default::default()
    }
}

pub async fn create_enrollment_token(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let request = token_request(&enterprise, matches);

    let token = context
        .api
        .create_enrollment_token(&enterprise, &request)
        .await
        .context("create enrollment token")?;

    writeln!(out)?;
    cwriteln!(out, "<blue>Enrollment token successfully created.</blue>")?;
    writeln!(out)?;
    match token.value.as_deref() {
        Some(value) => {
            writeln!(out, "Open this URL on Android device:")?;
            writeln!(out, "{}", enrollment_url(value))?;
        }
        None => cwriteln!(out, "<yellow>The server returned no token value.</yellow>")?,
    }
    Ok(())
}

pub async fn list_enrollment_tokens(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let response = context
        .api
        .list_enrollment_tokens(&enterprise)
        .await
        .context("get enrollment tokens")?;

    writeln!(out)?;
    if !response.enrollment_tokens.is_empty() {
        cwriteln!(out, "<blue>Enrollment tokens:</blue>")?;
        writeln!(out)?;
    }
    writeln!(
        out,
        "{}",
        format::summary(&response.enrollment_tokens, NO_ENROLLMENT_TOKENS_MESSAGE)
    )?;
    Ok(())
}

pub async fn get_enrollment_token(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let id = required_string(matches, PARAMETER_NAME)?;
    let name = resolution::enrollment_token_name(&enterprise, id);

    let token = context
        .api
        .get_enrollment_token(&name)
        .await
        .context("get enrollment token")?;

    writeln!(out)?;
    cwriteln!(out, "<blue>'{}' enrollment token details:</blue>", id)?;
    writeln!(out)?;
    writeln!(out, "{}", format::details(&token))?;

    if matches.get_flag(PARAMETER_SAVE) {
        let path = format::save_details(&token, &name, context.output_dir)?;
        report_saved(out, "enrollment token", &path)?;
    }
    Ok(())
}

pub async fn delete_enrollment_token(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let id = required_string(matches, PARAMETER_NAME)?;
    let name = resolution::enrollment_token_name(&enterprise, id);

    context
        .api
        .delete_enrollment_token(&name)
        .await
        .context("delete enrollment token")?;

    writeln!(out)?;
    cwriteln!(out, "<green>{} enrollment token successfully deleted.</green>", id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::tests::{configuration_with_default, leaf_matches, output, FakeApi};
    use std::path::Path;
    use tempfile::TempDir;

    #[tokio::test]
    async fn add_defaults_to_default_policy_and_prints_url() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&["enrollment-tokens", "add"]);
        let mut out = Vec::new();

        create_enrollment_token(&context, &matches, &mut out).await.unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].target, "enterprises/E1");
        let body = calls[0].body.clone().unwrap();
        assert_eq!(body["policyName"], "enterprises/E1/policies/default");
        assert!(body.get("allowPersonalUsage").is_none());
        assert!(output(out)
            .contains("https://enterprise.google.com/android/enroll?et=ABCDEFGHIJ"));
    }

    #[tokio::test]
    async fn add_passes_optional_flags() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&[
            "enrollment-tokens",
            "add",
            "--policy-name",
            "kiosk",
            "--byod",
            "--duration",
            "3600",
            "--one-time-only",
        ]);

        create_enrollment_token(&context, &matches, &mut Vec::new())
            .await
            .unwrap();

        let body = api.calls()[0].body.clone().unwrap();
        assert_eq!(body["policyName"], "enterprises/E1/policies/kiosk");
        assert_eq!(body["allowPersonalUsage"], PERSONAL_USAGE_ALLOWED);
        assert_eq!(body["duration"], "3600s");
        assert_eq!(body["oneTimeOnly"], true);
    }

    #[tokio::test]
    async fn empty_list_prints_advisory() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&["enrollment-tokens", "list"]);
        let mut out = Vec::new();

        list_enrollment_tokens(&context, &matches, &mut out).await.unwrap();

        assert!(output(out).contains(NO_ENROLLMENT_TOKENS_MESSAGE));
    }

    #[tokio::test]
    async fn get_saves_token_details() {
        let dir = TempDir::new().unwrap();
        let api = FakeApi {
            tokens: vec![EnrollmentToken {
                name: "enterprises/E1/enrollmentTokens/tok1".to_string(),
                value: Some("VALUE".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, dir.path());
        let matches = leaf_matches(&["enrollment-tokens", "get", "-n", "tok1", "--save"]);

        get_enrollment_token(&context, &matches, &mut Vec::new())
            .await
            .unwrap();

        assert!(dir.path().join("tok1-enrollment-token-details.json").is_file());
    }

    #[tokio::test]
    async fn delete_targets_token_name() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&["enrollment-tokens", "delete", "--name", "tok1"]);

        delete_enrollment_token(&context, &matches, &mut Vec::new())
            .await
            .unwrap();

        assert_eq!(
            api.calls()[0].target,
            "enterprises/E1/enrollmentTokens/tok1"
        );
    }
}
