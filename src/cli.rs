//! Command dispatch.
//!
//! Maps the parsed command path onto its handler. `config` works on the local
//! file only; every other command gets an API client, which is created here
//! and only for those commands.

use crate::{
    actions::{
        config, devices, enrollment_tokens, enterprises, operations, policies, signup,
        ActionContext, CliActionError,
    },
    android_management::{AndroidManagementClient, DEFAULT_BASE_URL},
    api::ManagementApi,
    auth::TokenProvider,
    commands::params::{
        COMMAND_ADD, COMMAND_BIND, COMMAND_CANCEL, COMMAND_CLEAR_APP_DATA, COMMAND_CONFIG,
        COMMAND_CREATE_SIGNUP_URL, COMMAND_DELETE, COMMAND_DEVICES, COMMAND_ENROLLMENT_TOKENS,
        COMMAND_ENTERPRISES, COMMAND_GET, COMMAND_LIST, COMMAND_LOCK, COMMAND_OPERATIONS,
        COMMAND_PATCH, COMMAND_POLICIES, COMMAND_REBOOT, COMMAND_RELINQUISH_OWNERSHIP,
        COMMAND_RESET_PASSWORD, COMMAND_START_LOST_MODE, COMMAND_STOP_LOST_MODE, COMMAND_UPDATE,
    },
    configuration::{Configuration, KEY_SERVICE_ACCOUNT_KEY},
    error::CliError,
    model::DeviceCommandType,
    setup::Prompter,
};
use clap::ArgMatches;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, trace};

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    match sub_matches.subcommand() {
        Some((name, _)) => name.to_string(),
        None => "unknown".to_string(),
    }
}

fn unsupported(sub_matches: &ArgMatches) -> CliError {
    CliError::UnsupportedSubcommand(extract_subcommand_name(sub_matches))
}

/// Builds the Android Management API client from the configuration.
pub fn create_client(configuration: &Configuration) -> Result<AndroidManagementClient, CliError> {
    let key_path = PathBuf::from(configuration.require(KEY_SERVICE_ACCOUNT_KEY)?);
    let tokens = TokenProvider::from_environment_or_key(&key_path)?;
    let base_url = configuration.api_base_url().unwrap_or(DEFAULT_BASE_URL);
    debug!("Using API at {}", base_url);
    Ok(AndroidManagementClient::new(base_url, tokens)?)
}

/// Runs the command described by `matches`.
pub async fn execute_command(
    matches: &ArgMatches,
    configuration: &mut Configuration,
    configuration_path: &Path,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_CONFIG, sub_matches)) => Ok(config::update_configuration(
            configuration,
            configuration_path,
            sub_matches,
            out,
        )?),
        Some(_) => {
            let client = create_client(configuration)?;
            let output_dir = std::env::current_dir().map_err(CliActionError::from)?;
            dispatch_remote(
                &client,
                matches,
                configuration,
                configuration_path,
                &output_dir,
                prompter,
                out,
            )
            .await
        }
        None => Err(unsupported(matches)),
    }
}

/// Dispatches every command that talks to the API.
pub async fn dispatch_remote(
    api: &dyn ManagementApi,
    matches: &ArgMatches,
    configuration: &mut Configuration,
    configuration_path: &Path,
    output_dir: &Path,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    // The only remote command that changes the configuration.
    if let Some((COMMAND_ENTERPRISES, sub_matches)) = matches.subcommand() {
        if let Some((COMMAND_BIND, bind_matches)) = sub_matches.subcommand() {
            return Ok(enterprises::bind_enterprise(
                api,
                configuration,
                configuration_path,
                prompter,
                bind_matches,
                out,
            )
            .await?);
        }
    }

    let context = ActionContext::new(api, configuration, output_dir);

    match matches.subcommand() {
        Some((COMMAND_CREATE_SIGNUP_URL, _)) => {
            trace!("Executing \"create-signup-url\" command...");
            signup::create_signup_url(&context, out).await?
        }
        Some((COMMAND_ENTERPRISES, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, _)) => enterprises::list_enterprises(&context, out).await?,
            Some((COMMAND_GET, m)) => enterprises::get_enterprise(&context, m, out).await?,
            Some((COMMAND_PATCH, m)) => enterprises::patch_enterprise(&context, m, out).await?,
            Some((COMMAND_DELETE, m)) => enterprises::delete_enterprise(&context, m, out).await?,
            _ => return Err(unsupported(sub_matches)),
        },
        Some((COMMAND_POLICIES, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_PATCH, m)) => policies::patch_policy(&context, m, out).await?,
            Some((COMMAND_LIST, m)) => policies::list_policies(&context, m, out).await?,
            Some((COMMAND_GET, m)) => policies::get_policy(&context, m, out).await?,
            Some((COMMAND_DELETE, m)) => policies::delete_policy(&context, m, out).await?,
            _ => return Err(unsupported(sub_matches)),
        },
        Some((COMMAND_ENROLLMENT_TOKENS, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_ADD, m)) => {
                enrollment_tokens::create_enrollment_token(&context, m, out).await?
            }
            Some((COMMAND_LIST, m)) => {
                enrollment_tokens::list_enrollment_tokens(&context, m, out).await?
            }
            Some((COMMAND_GET, m)) => {
                enrollment_tokens::get_enrollment_token(&context, m, out).await?
            }
            Some((COMMAND_DELETE, m)) => {
                enrollment_tokens::delete_enrollment_token(&context, m, out).await?
            }
            _ => return Err(unsupported(sub_matches)),
        },
        Some((COMMAND_DEVICES, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, m)) => devices::list_devices(&context, m, out).await?,
            Some((COMMAND_GET, m)) => devices::get_device(&context, m, out).await?,
            Some((COMMAND_UPDATE, m)) => devices::update_device(&context, m, out).await?,
            Some((COMMAND_DELETE, m)) => devices::delete_device(&context, m, out).await?,
            Some((name, m)) => match device_command_type(name) {
                Some(command_type) => {
                    devices::issue_device_command(&context, command_type, m, out).await?
                }
                None => return Err(unsupported(sub_matches)),
            },
            None => return Err(unsupported(sub_matches)),
        },
        Some((COMMAND_OPERATIONS, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, m)) => operations::list_operations(&context, m, out).await?,
            Some((COMMAND_GET, m)) => operations::get_operation(&context, m, out).await?,
            Some((COMMAND_CANCEL, m)) => operations::cancel_operation(&context, m, out).await?,
            _ => return Err(unsupported(sub_matches)),
        },
        _ => return Err(unsupported(matches)),
    }
    Ok(())
}

/// The remote command behind a `devices` subcommand name.
pub fn device_command_type(subcommand: &str) -> Option<DeviceCommandType> {
    match subcommand {
        COMMAND_RESET_PASSWORD => Some(DeviceCommandType::ResetPassword),
        COMMAND_REBOOT => Some(DeviceCommandType::Reboot),
        COMMAND_LOCK => Some(DeviceCommandType::Lock),
        COMMAND_RELINQUISH_OWNERSHIP => Some(DeviceCommandType::RelinquishOwnership),
        COMMAND_CLEAR_APP_DATA => Some(DeviceCommandType::ClearAppData),
        COMMAND_START_LOST_MODE => Some(DeviceCommandType::StartLostMode),
        COMMAND_STOP_LOST_MODE => Some(DeviceCommandType::StopLostMode),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::tests::{configuration_with_default, output, FakeApi};
    use crate::commands::cli_command;
    use crate::setup::tests::ScriptedPrompter;
    use tempfile::TempDir;

    async fn run(api: &FakeApi, args: &[&str]) -> Result<String, CliError> {
        let dir = TempDir::new().unwrap();
        let matches = cli_command()
            .try_get_matches_from(std::iter::once("amdm").chain(args.iter().copied()))
            .unwrap();
        let mut configuration = configuration_with_default();
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let mut out = Vec::new();
        dispatch_remote(
            api,
            &matches,
            &mut configuration,
            &dir.path().join("config.json"),
            dir.path(),
            &mut prompter,
            &mut out,
        )
        .await?;
        Ok(output(out))
    }

    #[test]
    fn every_device_command_maps_to_a_type() {
        let devices = crate::commands::devices::devices_command();
        let mapped = devices
            .get_subcommands()
            .filter(|command| device_command_type(command.get_name()).is_some())
            .count();
        assert_eq!(mapped, 7);
        assert_eq!(device_command_type(COMMAND_LIST), None);
    }

    #[tokio::test]
    async fn each_command_makes_exactly_one_call() {
        let cases: [(&[&str], &str); 8] = [
            (&["create-signup-url"], "create_signup_url"),
            (&["enterprises", "list"], "list_enterprises"),
            (&["policies", "list"], "list_policies"),
            (&["enrollment-tokens", "add"], "create_enrollment_token"),
            (&["devices", "list"], "list_devices"),
            (&["devices", "lock", "-n", "d1"], "issue_command"),
            (&["devices", "stop-lost-mode", "-n", "d1"], "issue_command"),
            (&["operations", "list", "-d", "d1"], "list_operations"),
        ];
        for (args, operation) in cases {
            let api = FakeApi::default();
            run(&api, args).await.unwrap();
            let calls = api.calls();
            assert_eq!(calls.len(), 1, "{:?}", args);
            assert_eq!(calls[0].operation, operation, "{:?}", args);
        }
    }

    #[tokio::test]
    async fn bind_goes_through_the_prompter_path() {
        let api = FakeApi::default();
        let output = run(
            &api,
            &[
                "enterprises",
                "bind",
                "--signup-url-name",
                "signupUrls/C1",
                "--enterprise-token",
                "tok",
            ],
        )
        .await
        .unwrap();
        assert!(output.contains("enterprises/LC0new"));
        assert_eq!(api.calls()[0].operation, "create_enterprise");
    }

    #[tokio::test]
    async fn remote_failure_becomes_action_error() {
        let api = FakeApi {
            failure: Some((404, "Device not found")),
            ..Default::default()
        };
        let error = run(&api, &["devices", "get", "-n", "d1"]).await.unwrap_err();
        assert_eq!(error.to_string(), "Couldn't get device: 404: Device not found");
        assert_eq!(error.exit_code().code(), 1);
    }

    #[test]
    fn client_uses_configured_base_url() {
        let key = tempfile::NamedTempFile::new().unwrap();
        let mut configuration = Configuration::default();
        configuration.set(KEY_SERVICE_ACCOUNT_KEY, key.path().to_string_lossy());
        configuration.set(crate::configuration::KEY_API_BASE_URL, "http://127.0.0.1:9/v1/");
        std::env::set_var(crate::auth::ACCESS_TOKEN_ENV, "test-token");

        let client = create_client(&configuration).unwrap();

        assert_eq!(client.base_url(), "http://127.0.0.1:9/v1");
    }
}
