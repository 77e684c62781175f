//! Persistent CLI configuration.
//!
//! The configuration is a flat string-to-string mapping stored as a single JSON
//! object in `<home>/.amdm_config.json`. It is read once at start-up, threaded
//! through the setup, resolution and dispatch code by reference and saved back
//! in full whenever something mutates it.

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = ".amdm_config.json";
pub const CONFIGURATION_FILE_ENV: &str = "AMDM_CONFIG_FILE";

pub const KEY_SERVICE_ACCOUNT_KEY: &str = "serviceAccountKey";
pub const KEY_PROJECT_ID: &str = "projectId";
pub const KEY_CALLBACK_URL: &str = "callbackUrl";
pub const KEY_DEFAULT_ENTERPRISE: &str = "defaultEnterprise";
pub const KEY_API_BASE_URL: &str = "apiBaseUrl";

pub const DEFAULT_CALLBACK_URL: &str = "https://lisica.design";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the home directory")]
    FailedToFindHomeDirectory,
    #[error("failed to read configuration file {path:?}: {cause}")]
    FailedToLoadData { path: PathBuf, cause: io::Error },
    #[error("configuration file {path:?} is not a valid JSON object: {cause}")]
    Corrupt {
        path: PathBuf,
        cause: serde_json::Error,
    },
    #[error("failed to write configuration file {path:?}: {cause}")]
    FailedToWriteData { path: PathBuf, cause: io::Error },
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
}

/// In-memory view of the configuration file.
///
/// Keys are kept sorted so that saving a freshly loaded configuration yields
/// the same document regardless of the order it was written in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, String>,
}

impl Configuration {
    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(path) = std::env::var(CONFIGURATION_FILE_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        match home_dir() {
            Some(mut path) => {
                path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(path)
            }
            None => Err(ConfigurationError::FailedToFindHomeDirectory),
        }
    }

    /// Reads the configuration at `path`.
    ///
    /// A missing file is an empty configuration. A file that exists but is not
    /// a JSON object of strings is reported as corrupt and never silently reset.
    pub fn load_from_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(cause) if cause.kind() == io::ErrorKind::NotFound => {
                debug!("No configuration file at {}", path.display());
                return Ok(Configuration::default());
            }
            Err(cause) => {
                return Err(ConfigurationError::FailedToLoadData {
                    path: path.to_path_buf(),
                    cause,
                })
            }
        };

        serde_json::from_str(&content).map_err(|cause| ConfigurationError::Corrupt {
            path: path.to_path_buf(),
            cause,
        })
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }

    /// Replaces the file at `path` with the full configuration.
    ///
    /// The document is written to a sibling temporary file first and renamed
    /// over the target, so a crash never leaves a truncated file behind.
    pub fn save(&self, path: &Path) -> Result<(), ConfigurationError> {
        let write_error = |cause: io::Error| ConfigurationError::FailedToWriteData {
            path: path.to_path_buf(),
            cause,
        };

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&directory).map_err(write_error)?;

        let mut file = NamedTempFile::new_in(&directory).map_err(write_error)?;
        self.write(&mut file).map_err(|e| write_error(e.into()))?;
        file.write_all(b"\n").map_err(write_error)?;
        file.as_file().sync_all().map_err(write_error)?;
        file.persist(path).map_err(|e| write_error(e.error))?;

        trace!("Configuration saved to {}", path.display());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Like [`Configuration::get`], but treats blank values as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }

    pub fn require(&self, key: &str) -> Result<&str, ConfigurationError> {
        self.get_non_empty(key)
            .ok_or_else(|| ConfigurationError::MissingRequiredPropertyValue {
                name: key.to_string(),
            })
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn service_account_key(&self) -> Option<PathBuf> {
        self.get_non_empty(KEY_SERVICE_ACCOUNT_KEY).map(PathBuf::from)
    }

    pub fn project_id(&self) -> Option<&str> {
        self.get_non_empty(KEY_PROJECT_ID)
    }

    pub fn callback_url(&self) -> &str {
        self.get_non_empty(KEY_CALLBACK_URL)
            .unwrap_or(DEFAULT_CALLBACK_URL)
    }

    pub fn default_enterprise(&self) -> Option<&str> {
        self.get_non_empty(KEY_DEFAULT_ENTERPRISE)
    }

    pub fn api_base_url(&self) -> Option<&str> {
        self.get_non_empty(KEY_API_BASE_URL)
    }

    /// Whether the keys needed to talk to the API are present.
    pub fn is_complete(&self) -> bool {
        self.service_account_key().is_some() && self.project_id().is_some()
    }
}
