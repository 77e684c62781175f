use crate::{
    actions::{
        enterprises::report_saved, optional_string, required_string, ActionContext,
        CliActionError, RemoteContext,
    },
    commands::params::{
        PARAMETER_DURATION, PARAMETER_EMAIL_ADDRESS, PARAMETER_LOCK_NOW, PARAMETER_MESSAGE,
        PARAMETER_NAME, PARAMETER_NEW_PASSWORD, PARAMETER_NO_CREDENTIALS_ON_BOOT,
        PARAMETER_ORGANIZATION, PARAMETER_PACKAGE, PARAMETER_PHONE_NUMBER, PARAMETER_POLICY_NAME,
        PARAMETER_REQUIRE_ENTRY, PARAMETER_SAVE, PARAMETER_STATE, PARAMETER_STREET_ADDRESS,
    },
    format::{self, NO_DEVICES_MESSAGE},
    model::{
        duration_string, ClearAppsDataParams, DeviceCommand, DeviceCommandType, DevicePatch,
        ResetPasswordFlag, StartLostModeParams, StopLostModeParams, UserFacingMessage,
    },
    resolution::{self, local_id},
};
use clap::ArgMatches;
use color_print::cwriteln;
use std::io::Write;
use tracing::debug;

pub const SAVE_HINT: &str =
    "Response is long to be displayed in terminal. Use '--save' flag to save response to a file.";

pub async fn list_devices(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let response = context
        .api
        .list_devices(&enterprise)
        .await
        .context("get devices")?;

    writeln!(out)?;
    if !response.devices.is_empty() {
        cwriteln!(out, "<blue>Devices:</blue>")?;
        writeln!(
            out,
            "Use 'devices get --name ID' to get all information about specific device."
        )?;
        writeln!(out)?;
    }
    writeln!(out, "{}", format::summary(&response.devices, NO_DEVICES_MESSAGE))?;
    Ok(())
}

pub async fn get_device(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let id = required_string(matches, PARAMETER_NAME)?;
    let name = resolution::device_name(&enterprise, id);

    let device = context.api.get_device(&name).await.context("get device")?;

    writeln!(out)?;
    cwriteln!(out, "<blue>'{}' device details:</blue>", id)?;
    writeln!(out)?;
    writeln!(out, "{}", format::details(&device))?;

    if matches.get_flag(PARAMETER_SAVE) {
        let path = format::save_details(&device, &name, context.output_dir)?;
        report_saved(out, "device", &path)?;
    } else {
        writeln!(out)?;
        cwriteln!(out, "<yellow>{}</yellow>", SAVE_HINT)?;
    }
    Ok(())
}

/// The patch for `devices update`. The clap group guarantees at least one of
/// policy and state is present.
fn device_patch(enterprise: &str, matches: &ArgMatches) -> DevicePatch {
    DevicePatch {
        policy_name: optional_string(matches, PARAMETER_POLICY_NAME)
            .map(|policy| resolution::policy_name(enterprise, policy)),
        state: optional_string(matches, PARAMETER_STATE).map(str::to_uppercase),
    }
}

pub async fn update_device(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let id = required_string(matches, PARAMETER_NAME)?;
    let patch = device_patch(&enterprise, matches);
    if patch.update_mask().is_empty() {
        return Err(CliActionError::ValidationError(
            "Please specify either '--policy-name' or '--state'.".to_string(),
        ));
    }
    let name = resolution::device_name(&enterprise, id);
    debug!("Patching {} with update mask {}", name, patch.update_mask());

    context
        .api
        .patch_device(&name, &patch)
        .await
        .context("update device")?;

    writeln!(out)?;
    cwriteln!(out, "<green>'{}' device updated successfully.</green>", id)?;
    Ok(())
}

pub async fn delete_device(
    context: &ActionContext<'_>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let id = required_string(matches, PARAMETER_NAME)?;
    let name = resolution::device_name(&enterprise, id);

    context
        .api
        .delete_device(&name)
        .await
        .context("delete device")?;

    writeln!(out)?;
    cwriteln!(out, "<green>{} device successfully deleted.</green>", id)?;
    Ok(())
}

fn message(matches: &ArgMatches, id: &str) -> Option<UserFacingMessage> {
    optional_string(matches, id).map(UserFacingMessage::from)
}

/// Builds the `issueCommand` body for `command_type` from the subcommand flags.
pub fn device_command(command_type: DeviceCommandType, matches: &ArgMatches) -> DeviceCommand {
    let mut command = DeviceCommand::new(command_type);
    match command_type {
        DeviceCommandType::Lock => {
            command.duration = matches
                .try_get_one::<u64>(PARAMETER_DURATION)
                .ok()
                .flatten()
                .map(|seconds| duration_string(*seconds));
        }
        DeviceCommandType::ResetPassword => {
            command.new_password = optional_string(matches, PARAMETER_NEW_PASSWORD).map(String::from);
            if matches.get_flag(PARAMETER_REQUIRE_ENTRY) {
                command.reset_password_flags.push(ResetPasswordFlag::RequireEntry);
            }
            if matches.get_flag(PARAMETER_NO_CREDENTIALS_ON_BOOT) {
                command
                    .reset_password_flags
                    .push(ResetPasswordFlag::DoNotAskCredentialsOnBoot);
            }
            if matches.get_flag(PARAMETER_LOCK_NOW) {
                command.reset_password_flags.push(ResetPasswordFlag::LockNow);
            }
        }
        DeviceCommandType::ClearAppData => {
            command.clear_apps_data_params = Some(ClearAppsDataParams {
                package_names: matches
                    .get_many::<String>(PARAMETER_PACKAGE)
                    .map(|packages| packages.cloned().collect())
                    .unwrap_or_default(),
            });
        }
        DeviceCommandType::StartLostMode => {
            command.start_lost_mode_params = Some(StartLostModeParams {
                lost_message: message(matches, PARAMETER_MESSAGE),
                lost_phone_number: message(matches, PARAMETER_PHONE_NUMBER),
                lost_email_address: optional_string(matches, PARAMETER_EMAIL_ADDRESS)
                    .map(String::from),
                lost_street_address: message(matches, PARAMETER_STREET_ADDRESS),
                lost_organization: message(matches, PARAMETER_ORGANIZATION),
            });
        }
        DeviceCommandType::StopLostMode => {
            command.stop_lost_mode_params = Some(StopLostModeParams {});
        }
        DeviceCommandType::Reboot | DeviceCommandType::RelinquishOwnership => {}
    }
    command
}

/// Sends one remote command to the device `--name` and prints the operation
/// that tracks it.
pub async fn issue_device_command(
    context: &ActionContext<'_>,
    command_type: DeviceCommandType,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> Result<(), CliActionError> {
    let enterprise = context.enterprise(matches)?;
    let id = required_string(matches, PARAMETER_NAME)?;
    let name = resolution::device_name(&enterprise, id);
    let command = device_command(command_type, matches);
    debug!("Issuing {} to {}", command_type, name);

    let operation = context
        .api
        .issue_command(&name, &command)
        .await
        .context("issue device command")?;

    let operation_id = local_id(&operation.name);
    writeln!(out)?;
    cwriteln!(out, "<green>{} command sent to '{}' device.</green>", command_type, id)?;
    cwriteln!(out, "<blue>Operation ID:</blue> {}", operation_id)?;
    writeln!(
        out,
        "Use 'operations get --device {} --id {}' to follow its progress.",
        id, operation_id
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::tests::{configuration_with_default, leaf_matches, output, FakeApi};
    use crate::model::{Device, Ownership};
    use std::path::Path;
    use tempfile::TempDir;

    #[tokio::test]
    async fn zero_devices_prints_advisory_not_table() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&["devices", "list"]);
        let mut out = Vec::new();

        list_devices(&context, &matches, &mut out).await.unwrap();

        let printed = output(out);
        assert!(printed.contains(NO_DEVICES_MESSAGE));
        assert!(!printed.contains("Ownership"));
    }

    #[tokio::test]
    async fn list_shows_ownership_labels() {
        let api = FakeApi {
            devices: vec![
                Device {
                    name: "enterprises/E1/devices/d1".to_string(),
                    ownership: Some(Ownership::CompanyOwned),
                    ..Default::default()
                },
                Device {
                    name: "enterprises/E1/devices/d2".to_string(),
                    ownership: Some(Ownership::PersonallyOwned),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&["devices", "ls"]);
        let mut out = Vec::new();

        list_devices(&context, &matches, &mut out).await.unwrap();

        let printed = output(out);
        assert!(printed.contains("Company-owned"));
        assert!(printed.contains("BYOD"));
    }

    #[tokio::test]
    async fn get_with_save_writes_device_details() {
        let dir = TempDir::new().unwrap();
        let api = FakeApi {
            devices: vec![Device {
                name: "enterprises/E1/devices/d1".to_string(),
                state: Some("ACTIVE".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, dir.path());
        let matches = leaf_matches(&["devices", "get", "--name", "d1", "--save"]);
        let mut out = Vec::new();

        get_device(&context, &matches, &mut out).await.unwrap();

        let saved = dir.path().join("d1-device-details.json");
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(saved).unwrap()).unwrap();
        assert_eq!(json["state"], "ACTIVE");
        let printed = output(out);
        assert!(printed.contains("d1-device-details.json"));
        assert!(!printed.contains(SAVE_HINT));
    }

    #[tokio::test]
    async fn get_without_save_suggests_the_flag() {
        let dir = TempDir::new().unwrap();
        let api = FakeApi {
            devices: vec![Device {
                name: "enterprises/E1/devices/d1".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, dir.path());
        let matches = leaf_matches(&["devices", "get", "--name", "d1"]);
        let mut out = Vec::new();

        get_device(&context, &matches, &mut out).await.unwrap();

        assert!(output(out).contains(SAVE_HINT));
        assert!(!dir.path().join("d1-device-details.json").exists());
    }

    #[tokio::test]
    async fn update_builds_mask_from_supplied_fields() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&["devices", "update", "-n", "d1", "--state", "disabled"]);

        update_device(&context, &matches, &mut Vec::new()).await.unwrap();

        let calls = api.calls();
        assert_eq!(calls[0].target, "enterprises/E1/devices/d1");
        let body = calls[0].body.clone().unwrap();
        assert_eq!(body["state"], "DISABLED");
        assert_eq!(body["updateMask"], "state");
        assert!(body.get("policyName").is_none());
    }

    #[tokio::test]
    async fn update_with_policy_and_state() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&[
            "devices", "update", "-n", "d1", "-p", "kiosk", "-s", "active",
        ]);

        update_device(&context, &matches, &mut Vec::new()).await.unwrap();

        let body = api.calls()[0].body.clone().unwrap();
        assert_eq!(body["policyName"], "enterprises/E1/policies/kiosk");
        assert_eq!(body["updateMask"], "policyName,state");
    }

    #[tokio::test]
    async fn reboot_issues_exactly_one_command() {
        let api = FakeApi::default();
        let configuration = configuration_with_default();
        let context = ActionContext::new(&api, &configuration, Path::new("."));
        let matches = leaf_matches(&["devices", "reboot", "--name", "d1"]);
        let mut out = Vec::new();

        issue_device_command(&context, DeviceCommandType::Reboot, &matches, &mut out)
            .await
            .unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation, "issue_command");
        assert_eq!(calls[0].body.as_ref().unwrap()["type"], "REBOOT");
        assert!(output(out).contains("op-1"));
    }

    #[test]
    fn reset_password_collects_flags() {
        let matches = leaf_matches(&[
            "devices",
            "reset-password",
            "-n",
            "d1",
            "--new-password",
            "1234",
            "--require-entry",
            "--no-credentials-on-boot",
            "--lock-now",
        ]);
        let command = device_command(DeviceCommandType::ResetPassword, &matches);
        assert_eq!(command.new_password.as_deref(), Some("1234"));
        assert_eq!(
            command.reset_password_flags,
            vec![
                ResetPasswordFlag::RequireEntry,
                ResetPasswordFlag::DoNotAskCredentialsOnBoot,
                ResetPasswordFlag::LockNow
            ]
        );
    }

    #[test]
    fn lock_duration_is_formatted_in_seconds() {
        let matches = leaf_matches(&["devices", "lock", "-n", "d1", "--duration", "600"]);
        let command = device_command(DeviceCommandType::Lock, &matches);
        assert_eq!(command.duration.as_deref(), Some("600s"));
    }

    #[test]
    fn clear_app_data_lists_every_package() {
        let matches = leaf_matches(&[
            "devices",
            "clear-app-data",
            "-n",
            "d1",
            "--package",
            "com.example.a",
            "--package",
            "com.example.b",
        ]);
        let command = device_command(DeviceCommandType::ClearAppData, &matches);
        assert_eq!(
            command.clear_apps_data_params.unwrap().package_names,
            vec!["com.example.a", "com.example.b"]
        );
    }

    #[test]
    fn start_lost_mode_wraps_messages() {
        let matches = leaf_matches(&[
            "devices",
            "start-lost-mode",
            "-n",
            "d1",
            "--message",
            "Please return",
            "--email-address",
            "it@example.com",
        ]);
        let command = device_command(DeviceCommandType::StartLostMode, &matches);
        let params = command.start_lost_mode_params.unwrap();
        assert_eq!(params.lost_message, Some(UserFacingMessage::from("Please return")));
        assert_eq!(params.lost_email_address.as_deref(), Some("it@example.com"));
        assert!(params.lost_phone_number.is_none());
    }
}
