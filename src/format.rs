//! Rendering of API responses for the terminal.
//!
//! List commands print a summary table with a fixed column set per resource
//! type, get commands print an ordered field dump, and `--save` writes the full
//! response as pretty-printed JSON next to the caller.

use crate::{
    model::{Device, EnrollmentToken, Enterprise, Operation, Ownership, Policy},
    resolution::local_id,
};
use color_print::cformat;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const NO_VALUE: &str = "-";

pub const NO_ENTERPRISES_MESSAGE: &str =
    "No enterprises bound to this project. Use 'create-signup-url' and 'enterprises bind' commands to add one.";
pub const NO_POLICIES_MESSAGE: &str =
    "No policies available. Use 'policies patch' command to add a policy.";
pub const NO_ENROLLMENT_TOKENS_MESSAGE: &str =
    "No enrollment tokens available. Use 'enrollment-tokens add' command to create one.";
pub const NO_DEVICES_MESSAGE: &str =
    "No devices enrolled. Use 'enrollment-tokens add' command to add a enrollment token and use it to enroll device.";
pub const NO_OPERATIONS_MESSAGE: &str = "No operations available.";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
    #[error("failed to write {path:?}: {cause}")]
    FailedToSave {
        path: PathBuf,
        cause: std::io::Error,
    },
}

/// A resource that renders as one row of a summary table.
pub trait Tabular {
    fn header() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

/// A resource that renders as a labelled field dump.
pub trait Detailed {
    /// Used in `--save` file names, e.g. `device` for `<id>-device-details.json`.
    const KIND: &'static str;
    fn fields(&self) -> Vec<(&'static str, String)>;
}

fn text(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(NO_VALUE).to_string()
}

fn id_of(name: Option<&str>) -> String {
    text(name.map(local_id))
}

fn flag(value: Option<bool>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NO_VALUE.to_string())
}

/// Summary table for `items`, or `empty_message` when there is nothing to show.
pub fn summary<T: Tabular>(items: &[T], empty_message: &str) -> String {
    if items.is_empty() {
        return cformat!("<yellow>{}</yellow>", empty_message);
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(T::header());
    for item in items {
        table.add_row(item.row());
    }
    table.to_string()
}

pub fn details<T: Detailed>(item: &T) -> String {
    item.fields()
        .into_iter()
        .map(|(label, value)| cformat!("<blue>{}:</blue> {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn details_file_name(id: &str, kind: &str) -> String {
    format!("{}-{}-details.json", local_id(id), kind)
}

/// Writes `item` as pretty JSON to `<dir>/<id>-<kind>-details.json`.
pub fn save_details<T: Detailed + Serialize>(
    item: &T,
    id: &str,
    dir: &Path,
) -> Result<PathBuf, FormattingError> {
    let path = dir.join(details_file_name(id, T::KIND));
    let content = serde_json::to_string_pretty(item)?;
    std::fs::write(&path, content).map_err(|cause| FormattingError::FailedToSave {
        path: path.clone(),
        cause,
    })?;
    Ok(path)
}

impl Tabular for Enterprise {
    fn header() -> Vec<&'static str> {
        vec!["Name (ID)", "Display name"]
    }

    fn row(&self) -> Vec<String> {
        vec![text(Some(self.name.as_str())), text(self.enterprise_display_name.as_deref())]
    }
}

impl Detailed for Enterprise {
    const KIND: &'static str = "enterprise";

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", text(Some(self.name.as_str()))),
            ("Display name", text(self.enterprise_display_name.as_deref())),
            (
                "Primary color",
                self.primary_color
                    .map(|c| format!("#{:06X}", c))
                    .unwrap_or_else(|| NO_VALUE.to_string()),
            ),
            (
                "Enabled notification types",
                if self.enabled_notification_types.is_empty() {
                    NO_VALUE.to_string()
                } else {
                    self.enabled_notification_types.join(", ")
                },
            ),
            (
                "Terms and conditions",
                self.terms_and_conditions.len().to_string(),
            ),
        ]
    }
}

impl Tabular for Policy {
    fn header() -> Vec<&'static str> {
        vec!["ID", "Version"]
    }

    fn row(&self) -> Vec<String> {
        vec![id_of(Some(self.name.as_str())), text(self.version.as_deref())]
    }
}

impl Detailed for Policy {
    const KIND: &'static str = "policy";

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", text(Some(self.name.as_str()))),
            ("Version", text(self.version.as_deref())),
            ("Applications", self.applications.len().to_string()),
            ("Camera disabled", flag(self.camera_disabled)),
            ("Status bar disabled", flag(self.status_bar_disabled)),
            ("Play Store mode", text(self.play_store_mode.as_deref())),
        ]
    }
}

impl Tabular for EnrollmentToken {
    fn header() -> Vec<&'static str> {
        vec!["ID", "Policy (ID)", "Expiration", "Personal usage"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            id_of(Some(self.name.as_str())),
            id_of(self.policy_name.as_deref()),
            text(self.expiration_timestamp.as_deref()),
            text(self.allow_personal_usage.as_deref()),
        ]
    }
}

impl Detailed for EnrollmentToken {
    const KIND: &'static str = "enrollment-token";

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", text(Some(self.name.as_str()))),
            ("Value", text(self.value.as_deref())),
            ("Policy name", text(self.policy_name.as_deref())),
            ("Expiration", text(self.expiration_timestamp.as_deref())),
            ("Duration", text(self.duration.as_deref())),
            ("Personal usage", text(self.allow_personal_usage.as_deref())),
            ("One time only", flag(self.one_time_only)),
        ]
    }
}

impl Tabular for Device {
    fn header() -> Vec<&'static str> {
        vec!["ID", "Ownership", "Last report time", "Applied policy (ID)"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            id_of(Some(self.name.as_str())),
            self.ownership
                .as_ref()
                .map_or("Unspecified", Ownership::label)
                .to_string(),
            text(self.last_status_report_time.as_deref()),
            id_of(self.applied_policy_name.as_deref()),
        ]
    }
}

impl Detailed for Device {
    const KIND: &'static str = "device";

    fn fields(&self) -> Vec<(&'static str, String)> {
        let hardware = self.hardware_info.clone().unwrap_or_default();
        vec![
            ("Name", text(Some(self.name.as_str()))),
            ("Management mode", text(self.management_mode.as_deref())),
            ("State", text(self.state.as_deref())),
            ("Enrollment time", text(self.enrollment_time.as_deref())),
            ("Last status report", text(self.last_status_report_time.as_deref())),
            ("Policy name", text(self.policy_name.as_deref())),
            ("Enrollment token name", text(self.enrollment_token_name.as_deref())),
            ("Brand", text(hardware.brand.as_deref())),
            ("CPU", text(hardware.hardware.as_deref())),
            ("Manufacturer", text(hardware.manufacturer.as_deref())),
            ("Model", text(hardware.model.as_deref())),
            ("Serial number", text(hardware.serial_number.as_deref())),
            (
                "Ownership",
                self.ownership
                    .as_ref()
                    .map_or("Unspecified", Ownership::label)
                    .to_string(),
            ),
        ]
    }
}

impl Tabular for Operation {
    fn header() -> Vec<&'static str> {
        vec!["ID", "Type", "Sent"]
    }

    fn row(&self) -> Vec<String> {
        let metadata = self.metadata.as_ref();
        vec![
            id_of(Some(self.name.as_str())),
            text(metadata.and_then(|m| m.command_type.as_deref())),
            text(metadata.and_then(|m| m.create_time.as_deref())),
        ]
    }
}

impl Detailed for Operation {
    const KIND: &'static str = "operation";

    fn fields(&self) -> Vec<(&'static str, String)> {
        let metadata = self.metadata.as_ref();
        let error = self.error.as_ref().map(|status| {
            format!(
                "{}: {}",
                status.code.unwrap_or_default(),
                status.message.as_deref().unwrap_or_default()
            )
        });
        vec![
            ("Name", text(Some(self.name.as_str()))),
            ("Type", text(metadata.and_then(|m| m.command_type.as_deref()))),
            ("Done", flag(self.done)),
            ("Created", text(metadata.and_then(|m| m.create_time.as_deref()))),
            ("Error", text(error.as_deref())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HardwareInfo, OperationMetadata, Ownership};
    use tempfile::TempDir;

    fn device(id: &str, ownership: Ownership) -> Device {
        Device {
            name: format!("enterprises/E1/devices/{}", id),
            ownership: Some(ownership),
            last_status_report_time: Some("2024-05-01T10:00:00Z".to_string()),
            applied_policy_name: Some("enterprises/E1/policies/kiosk".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_list_renders_advisory_message() {
        let output = summary::<Device>(&[], NO_DEVICES_MESSAGE);
        assert!(output.contains(NO_DEVICES_MESSAGE));
        assert!(!output.contains("Ownership"));
    }

    #[test]
    fn device_rows_use_trailing_ids_and_ownership_labels() {
        let output = summary(
            &[
                device("d1", Ownership::PersonallyOwned),
                device("d2", Ownership::CompanyOwned),
                device("d3", Ownership::Unspecified),
            ],
            NO_DEVICES_MESSAGE,
        );
        assert!(output.contains("Applied policy (ID)"));
        assert!(output.contains("d1"));
        assert!(output.contains("kiosk"));
        assert!(!output.contains("enterprises/E1/devices"));
        assert!(output.contains("BYOD"));
        assert!(output.contains("Company-owned"));
        assert!(output.contains("Unspecified"));
    }

    #[test]
    fn device_details_are_ordered() {
        let mut device = device("d1", Ownership::CompanyOwned);
        device.hardware_info = Some(HardwareInfo {
            brand: Some("google".to_string()),
            serial_number: Some("SN123".to_string()),
            ..Default::default()
        });

        let fields = device.fields();
        let labels: Vec<_> = fields.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels.first(), Some(&"Name"));
        assert_eq!(labels.last(), Some(&"Ownership"));
        assert!(fields.contains(&("Brand", "google".to_string())));
        assert!(fields.contains(&("Serial number", "SN123".to_string())));
        assert!(fields.contains(&("Model", NO_VALUE.to_string())));
        assert!(fields.contains(&("Ownership", "Company-owned".to_string())));
    }

    #[test]
    fn operation_row_reads_metadata() {
        let operation = Operation {
            name: "enterprises/E1/devices/d1/operations/op7".to_string(),
            metadata: Some(OperationMetadata {
                command_type: Some("LOCK".to_string()),
                create_time: Some("2024-05-01T10:00:00Z".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            operation.row(),
            vec!["op7", "LOCK", "2024-05-01T10:00:00Z"]
        );
    }

    #[test]
    fn save_writes_pretty_json_named_after_id() {
        let dir = TempDir::new().unwrap();
        let device = device("d1", Ownership::PersonallyOwned);

        let path = save_details(&device, "d1", dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "d1-device-details.json");

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("\n  \"name\": \"enterprises/E1/devices/d1\""));
        assert!(content.contains("PERSONALLY_OWNED"));
    }

    #[test]
    fn saved_device_matches_server_response() {
        let dir = TempDir::new().unwrap();
        let raw = serde_json::json!({
            "name": "enterprises/E1/devices/d1",
            "ownership": "SOMETHING_NEW",
            "state": "ACTIVE",
            "hardwareInfo": {"brand": "google", "cpuShutdownTemperatures": [90.0]},
            "apiLevel": 34
        });
        let device: Device = serde_json::from_value(raw.clone()).unwrap();

        let path = save_details(&device, "d1", dir.path()).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(saved, raw);
    }

    #[test]
    fn policy_list_shows_id_and_version() {
        let policy = Policy {
            name: "enterprises/E1/policies/default".to_string(),
            version: Some("3".to_string()),
            ..Default::default()
        };
        assert_eq!(policy.row(), vec!["default", "3"]);
    }
}
