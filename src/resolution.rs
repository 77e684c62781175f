//! Enterprise scope resolution and resource name composition.
//!
//! Every enterprise-scoped command resolves its scope through [`resolve_enterprise`]:
//! an explicit `--enterprise-name` wins, then the `defaultEnterprise` stored in
//! the configuration. Names are used verbatim; callers pass fully-qualified
//! names such as `enterprises/LC01ro7nu8`.

use crate::configuration::Configuration;
use tracing::debug;

pub const MISSING_SCOPE_MESSAGE: &str = "Please use '--enterprise-name' (e.g. enterprises/LC03trycps) or specify defaultEnterprise in config (amdm config --add \"defaultEnterprise=enterprises/LC03trycps\").";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("{}", MISSING_SCOPE_MESSAGE)]
    MissingScope,
}

pub fn resolve_enterprise(
    explicit: Option<&str>,
    configuration: &Configuration,
) -> Result<String, ResolutionError> {
    if let Some(name) = explicit.filter(|name| !name.is_empty()) {
        debug!("Using enterprise from command line: {}", name);
        return Ok(name.to_string());
    }

    match configuration.default_enterprise() {
        Some(name) => {
            debug!("Using default enterprise from configuration: {}", name);
            Ok(name.to_string())
        }
        None => Err(ResolutionError::MissingScope),
    }
}

/// The trailing segment of a resource name, e.g. the device ID of
/// `enterprises/E/devices/3a1b`.
pub fn local_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

pub fn policy_name(enterprise: &str, policy_id: &str) -> String {
    format!("{}/policies/{}", enterprise, policy_id)
}

pub fn device_name(enterprise: &str, device_id: &str) -> String {
    format!("{}/devices/{}", enterprise, device_id)
}

pub fn enrollment_token_name(enterprise: &str, token_id: &str) -> String {
    format!("{}/enrollmentTokens/{}", enterprise, token_id)
}

pub fn operations_parent(enterprise: &str, device_id: &str) -> String {
    format!("{}/operations", device_name(enterprise, device_id))
}

pub fn operation_name(enterprise: &str, device_id: &str, operation_id: &str) -> String {
    format!("{}/{}", operations_parent(enterprise, device_id), operation_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::KEY_DEFAULT_ENTERPRISE;

    fn with_default(name: &str) -> Configuration {
        let mut configuration = Configuration::default();
        configuration.set(KEY_DEFAULT_ENTERPRISE, name);
        configuration
    }

    #[test]
    fn explicit_flag_wins_over_default() {
        let configuration = with_default("enterprises/Y");
        assert_eq!(
            resolve_enterprise(Some("enterprises/X"), &configuration).unwrap(),
            "enterprises/X"
        );
    }

    #[test]
    fn default_is_used_without_flag() {
        let configuration = with_default("enterprises/Y");
        assert_eq!(
            resolve_enterprise(None, &configuration).unwrap(),
            "enterprises/Y"
        );
        assert_eq!(
            resolve_enterprise(Some(""), &configuration).unwrap(),
            "enterprises/Y"
        );
    }

    #[test]
    fn missing_scope_without_flag_or_default() {
        let error = resolve_enterprise(None, &Configuration::default()).unwrap_err();
        assert_eq!(error, ResolutionError::MissingScope);
        assert!(error.to_string().contains("--enterprise-name"));
        assert!(error.to_string().contains("defaultEnterprise"));
    }

    #[test]
    fn explicit_names_are_not_normalized() {
        let configuration = Configuration::default();
        assert_eq!(resolve_enterprise(Some("LC01"), &configuration).unwrap(), "LC01");
    }

    #[test]
    fn local_id_is_trailing_segment() {
        assert_eq!(local_id("enterprises/E/devices/3a1b"), "3a1b");
        assert_eq!(local_id("plain"), "plain");
        assert_eq!(local_id(""), "");
    }

    #[test]
    fn names_compose_from_scope() {
        assert_eq!(policy_name("enterprises/E", "default"), "enterprises/E/policies/default");
        assert_eq!(
            operation_name("enterprises/E", "d1", "op9"),
            "enterprises/E/devices/d1/operations/op9"
        );
        assert_eq!(
            enrollment_token_name("enterprises/E", "t1"),
            "enterprises/E/enrollmentTokens/t1"
        );
    }
}
