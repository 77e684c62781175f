//! The remote device-management API as seen by the command handlers.
//!
//! Handlers only talk to [`ManagementApi`]; the production implementation
//! lives in [`crate::android_management`].

use crate::{
    auth::AuthError,
    model::{
        Device, DeviceCommand, DeviceList, DevicePatch, EnrollmentToken, EnrollmentTokenList,
        Enterprise, EnterpriseList, Operation, OperationList, Policy, PolicyList, SignupUrl,
    },
};
use async_trait::async_trait;
use serde_json::Value;

/// Error emitted by the Android Management API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{status}: {message}")]
    Remote { status: u16, message: String },
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Authentication error: {0}")]
    AuthError(#[from] AuthError),
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status reported by the server, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            ApiError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ManagementApi: Send + Sync {
    async fn create_signup_url(
        &self,
        project_id: &str,
        callback_url: &str,
    ) -> Result<SignupUrl, ApiError>;

    async fn create_enterprise(
        &self,
        project_id: &str,
        signup_url_name: &str,
        enterprise_token: &str,
    ) -> Result<Enterprise, ApiError>;

    async fn list_enterprises(&self, project_id: &str) -> Result<EnterpriseList, ApiError>;

    async fn get_enterprise(&self, name: &str) -> Result<Enterprise, ApiError>;

    async fn patch_enterprise(
        &self,
        name: &str,
        body: &Value,
        update_mask: Option<&str>,
    ) -> Result<Enterprise, ApiError>;

    async fn delete_enterprise(&self, name: &str) -> Result<(), ApiError>;

    async fn patch_policy(&self, name: &str, body: &Value) -> Result<Policy, ApiError>;

    async fn list_policies(&self, parent: &str) -> Result<PolicyList, ApiError>;

    async fn get_policy(&self, name: &str) -> Result<Policy, ApiError>;

    async fn delete_policy(&self, name: &str) -> Result<(), ApiError>;

    async fn create_enrollment_token(
        &self,
        parent: &str,
        token: &EnrollmentToken,
    ) -> Result<EnrollmentToken, ApiError>;

    async fn list_enrollment_tokens(&self, parent: &str) -> Result<EnrollmentTokenList, ApiError>;

    async fn get_enrollment_token(&self, name: &str) -> Result<EnrollmentToken, ApiError>;

    async fn delete_enrollment_token(&self, name: &str) -> Result<(), ApiError>;

    async fn list_devices(&self, parent: &str) -> Result<DeviceList, ApiError>;

    async fn get_device(&self, name: &str) -> Result<Device, ApiError>;

    async fn patch_device(&self, name: &str, patch: &DevicePatch) -> Result<Device, ApiError>;

    async fn delete_device(&self, name: &str) -> Result<(), ApiError>;

    async fn issue_command(
        &self,
        name: &str,
        command: &DeviceCommand,
    ) -> Result<Operation, ApiError>;

    async fn list_operations(&self, name: &str) -> Result<OperationList, ApiError>;

    async fn get_operation(&self, name: &str) -> Result<Operation, ApiError>;

    async fn cancel_operation(&self, name: &str) -> Result<(), ApiError>;
}
