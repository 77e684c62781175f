//! Data models for Android Management API resources.
//!
//! Only the fields the CLI renders are typed; everything else the server sends
//! is kept in `extra` so that `--save` writes the complete response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupUrl {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_notification_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terms_and_conditions: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseList {
    #[serde(default)]
    pub enterprises: Vec<Enterprise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default)]
    pub name: String,
    /// int64 values travel as JSON strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_bar_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_store_mode: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyList {
    #[serde(default)]
    pub policies: Vec<Policy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentToken {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_personal_usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_only: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentTokenList {
    #[serde(default)]
    pub enrollment_tokens: Vec<EnrollmentToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Device ownership. Values this client doesn't know are kept verbatim so
/// that a saved device matches what the server sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Ownership {
    PersonallyOwned,
    CompanyOwned,
    #[default]
    Unspecified,
    Other(String),
}

impl From<String> for Ownership {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PERSONALLY_OWNED" => Ownership::PersonallyOwned,
            "COMPANY_OWNED" => Ownership::CompanyOwned,
            "OWNERSHIP_UNSPECIFIED" => Ownership::Unspecified,
            _ => Ownership::Other(value),
        }
    }
}

impl From<Ownership> for String {
    fn from(ownership: Ownership) -> Self {
        match ownership {
            Ownership::PersonallyOwned => "PERSONALLY_OWNED".to_string(),
            Ownership::CompanyOwned => "COMPANY_OWNED".to_string(),
            Ownership::Unspecified => "OWNERSHIP_UNSPECIFIED".to_string(),
            Ownership::Other(value) => value,
        }
    }
}

impl Ownership {
    pub fn label(&self) -> &'static str {
        match self {
            Ownership::PersonallyOwned => "BYOD",
            Ownership::CompanyOwned => "Company-owned",
            Ownership::Unspecified | Ownership::Other(_) => "Unspecified",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status_report_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_token_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_info: Option<HardwareInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceList {
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Fields of a device that `devices update` may change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl DevicePatch {
    /// The `updateMask` listing exactly the fields that are set.
    pub fn update_mask(&self) -> String {
        let mut fields = Vec::new();
        if self.policy_name.is_some() {
            fields.push("policyName");
        }
        if self.state.is_some() {
            fields.push("state");
        }
        fields.join(",")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationMetadata {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub command_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<OperationMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationList {
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Remote commands a device can be told to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceCommandType {
    Lock,
    ResetPassword,
    Reboot,
    RelinquishOwnership,
    ClearAppData,
    StartLostMode,
    StopLostMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResetPasswordFlag {
    RequireEntry,
    DoNotAskCredentialsOnBoot,
    LockNow,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAppsDataParams {
    pub package_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserFacingMessage {
    #[serde(rename = "defaultMessage")]
    pub default_message: String,
}

impl From<&str> for UserFacingMessage {
    fn from(message: &str) -> Self {
        UserFacingMessage {
            default_message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartLostModeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_message: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_phone_number: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_street_address: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_organization: Option<UserFacingMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StopLostModeParams {}

/// Body of `devices.issueCommand`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCommand {
    #[serde(rename = "type")]
    pub command_type: DeviceCommandType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reset_password_flags: Vec<ResetPasswordFlag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_apps_data_params: Option<ClearAppsDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_lost_mode_params: Option<StartLostModeParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_lost_mode_params: Option<StopLostModeParams>,
}

impl DeviceCommand {
    pub fn new(command_type: DeviceCommandType) -> Self {
        DeviceCommand {
            command_type,
            duration: None,
            new_password: None,
            reset_password_flags: Vec::new(),
            clear_apps_data_params: None,
            start_lost_mode_params: None,
            stop_lost_mode_params: None,
        }
    }
}

/// Formats seconds as a protobuf `Duration` string, e.g. `3600s`.
pub fn duration_string(seconds: u64) -> String {
    format!("{}s", seconds)
}
