//! HTTP implementation of [`ManagementApi`] for the Android Management API v1.

use crate::{
    api::{ApiError, ManagementApi},
    auth::TokenProvider,
    model::{
        Device, DeviceCommand, DeviceList, DevicePatch, EnrollmentToken, EnrollmentTokenList,
        Enterprise, EnterpriseList, Operation, OperationList, Policy, PolicyList, SignupUrl,
    },
};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use tracing::{debug, trace};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://androidmanagement.googleapis.com/v1";

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    #[serde(default)]
    message: String,
}

pub struct AndroidManagementClient {
    client: Client,
    base_url: String,
    tokens: TokenProvider,
}

impl AndroidManagementClient {
    pub fn new(base_url: impl Into<String>, tokens: TokenProvider) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and returns the raw success body.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<String, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("{} {}", method, url);

        let token = self.tokens.access_token(&self.client).await?;
        let mut request = self.client.request(method, &url).bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }
        request = match body {
            Some(body) => request.json(&body),
            None => request.body(""),
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        trace!("Response {}: {}", status, text);

        if status.is_success() {
            Ok(text)
        } else {
            Err(remote_error(status.as_u16(), &text))
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let text = self.execute(method, path, query, body).await?;
        let text = if text.trim().is_empty() { "{}" } else { text.as_str() };
        Ok(serde_json::from_str(text)?)
    }

    async fn call_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        self.execute(method, path, &[], body).await.map(|_| ())
    }
}

/// Decodes a Google error envelope, falling back to the raw body.
fn remote_error(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<GoogleErrorBody>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ if body.trim().is_empty() => "no response body".to_string(),
        _ => body.trim().to_string(),
    };
    ApiError::Remote { status, message }
}

#[async_trait]
impl ManagementApi for AndroidManagementClient {
    async fn create_signup_url(
        &self,
        project_id: &str,
        callback_url: &str,
    ) -> Result<SignupUrl, ApiError> {
        self.call(
            Method::POST,
            "signupUrls",
            &[("projectId", project_id), ("callbackUrl", callback_url)],
            None,
        )
        .await
    }

    async fn create_enterprise(
        &self,
        project_id: &str,
        signup_url_name: &str,
        enterprise_token: &str,
    ) -> Result<Enterprise, ApiError> {
        self.call(
            Method::POST,
            "enterprises",
            &[
                ("projectId", project_id),
                ("signupUrlName", signup_url_name),
                ("enterpriseToken", enterprise_token),
            ],
            Some(json!({})),
        )
        .await
    }

    async fn list_enterprises(&self, project_id: &str) -> Result<EnterpriseList, ApiError> {
        self.call(Method::GET, "enterprises", &[("projectId", project_id)], None)
            .await
    }

    async fn get_enterprise(&self, name: &str) -> Result<Enterprise, ApiError> {
        self.call(Method::GET, name, &[], None).await
    }

    async fn patch_enterprise(
        &self,
        name: &str,
        body: &Value,
        update_mask: Option<&str>,
    ) -> Result<Enterprise, ApiError> {
        let query: Vec<(&str, &str)> = update_mask.map(|m| ("updateMask", m)).into_iter().collect();
        self.call(Method::PATCH, name, &query, Some(body.clone()))
            .await
    }

    async fn delete_enterprise(&self, name: &str) -> Result<(), ApiError> {
        self.call_empty(Method::DELETE, name, None).await
    }

    async fn patch_policy(&self, name: &str, body: &Value) -> Result<Policy, ApiError> {
        self.call(Method::PATCH, name, &[], Some(body.clone())).await
    }

    async fn list_policies(&self, parent: &str) -> Result<PolicyList, ApiError> {
        self.call(Method::GET, &format!("{}/policies", parent), &[], None)
            .await
    }

    async fn get_policy(&self, name: &str) -> Result<Policy, ApiError> {
        self.call(Method::GET, name, &[], None).await
    }

    async fn delete_policy(&self, name: &str) -> Result<(), ApiError> {
        self.call_empty(Method::DELETE, name, None).await
    }

    async fn create_enrollment_token(
        &self,
        parent: &str,
        token: &EnrollmentToken,
    ) -> Result<EnrollmentToken, ApiError> {
        self.call(
            Method::POST,
            &format!("{}/enrollmentTokens", parent),
            &[],
            Some(serde_json::to_value(token)?),
        )
        .await
    }

    async fn list_enrollment_tokens(&self, parent: &str) -> Result<EnrollmentTokenList, ApiError> {
        self.call(Method::GET, &format!("{}/enrollmentTokens", parent), &[], None)
            .await
    }

    async fn get_enrollment_token(&self, name: &str) -> Result<EnrollmentToken, ApiError> {
        self.call(Method::GET, name, &[], None).await
    }

    async fn delete_enrollment_token(&self, name: &str) -> Result<(), ApiError> {
        self.call_empty(Method::DELETE, name, None).await
    }

    async fn list_devices(&self, parent: &str) -> Result<DeviceList, ApiError> {
        self.call(Method::GET, &format!("{}/devices", parent), &[], None)
            .await
    }

    async fn get_device(&self, name: &str) -> Result<Device, ApiError> {
        self.call(Method::GET, name, &[], None).await
    }

    async fn patch_device(&self, name: &str, patch: &DevicePatch) -> Result<Device, ApiError> {
        let mask = patch.update_mask();
        self.call(
            Method::PATCH,
            name,
            &[("updateMask", mask.as_str())],
            Some(serde_json::to_value(patch)?),
        )
        .await
    }

    async fn delete_device(&self, name: &str) -> Result<(), ApiError> {
        self.call_empty(Method::DELETE, name, None).await
    }

    async fn issue_command(
        &self,
        name: &str,
        command: &DeviceCommand,
    ) -> Result<Operation, ApiError> {
        self.call(
            Method::POST,
            &format!("{}:issueCommand", name),
            &[],
            Some(serde_json::to_value(command)?),
        )
        .await
    }

    async fn list_operations(&self, name: &str) -> Result<OperationList, ApiError> {
        self.call(Method::GET, name, &[], None).await
    }

    async fn get_operation(&self, name: &str) -> Result<Operation, ApiError> {
        self.call(Method::GET, name, &[], None).await
    }

    async fn cancel_operation(&self, name: &str) -> Result<(), ApiError> {
        self.call_empty(Method::POST, &format!("{}:cancel", name), None)
            .await
    }
}
