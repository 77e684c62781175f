use crate::actions::{ActionContext, CliActionError, RemoteContext};
use color_print::cwriteln;
use std::io::Write;
use tracing::debug;

pub async fn create_signup_url(
    context: &ActionContext<'_>,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let project_id = context.project_id()?;
    let callback_url = context.configuration.callback_url();
    debug!("Creating signup URL for project {} with callback {}", project_id, callback_url);

    let signup_url = context
        .api
        .create_signup_url(project_id, callback_url)
        .await
        .context("create signup URL")?;

    writeln!(out)?;
    cwriteln!(out, "<blue>Signup URL name:</blue> {}", signup_url.name)?;
    cwriteln!(out, "<blue>Signup URL:</blue> {}", signup_url.url)?;
    writeln!(out)?;
    writeln!(
        out,
        "Save the signup URL name, you'll need it to bind the Android Enterprise to your Google Cloud project with the 'enterprises bind' command."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::tests::{configuration_with_default, output, FakeApi};
    use crate::configuration::{Configuration, DEFAULT_CALLBACK_URL, KEY_CALLBACK_URL};
    use serde_json::Value;
    use std::path::Path;

    #[tokio::test]
    async fn uses_default_callback_url() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let mut out = Vec::new();

        create_signup_url(&context, &mut out).await.unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].target, "p1");
        assert_eq!(calls[0].body, Some(Value::String(DEFAULT_CALLBACK_URL.to_string())));
        let printed = output(out);
        assert!(printed.contains("signupUrls/C1"));
        assert!(printed.contains("enterprises bind"));
    }

    #[tokio::test]
    async fn stored_callback_url_is_used() {
        let api = FakeApi::default();
        let mut configuration = configuration_with_default();
        configuration.set(KEY_CALLBACK_URL, "https://example.com/cb");
        let context = ActionContext::new(&api, &configuration, Path::new("."));

        create_signup_url(&context, &mut Vec::new()).await.unwrap();

        assert_eq!(
            api.calls()[0].body,
            Some(Value::String("https://example.com/cb".to_string()))
        );
    }

    #[tokio::test]
    async fn missing_project_id_makes_no_call() {
        let api = FakeApi::default();
        let configuration = Configuration::default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));

        let error = create_signup_url(&context, &mut Vec::new()).await.unwrap_err();

        assert!(matches!(error, CliActionError::ConfigurationError(_)));
        assert!(api.calls().is_empty());
    }
}
