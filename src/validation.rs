//! Input validators shared by the interactive setup and the command flags.
//!
//! Each validator returns the accepted (possibly normalized) value or a
//! human-readable message. The clap value parsers in `commands::params` and the
//! setup prompts both go through these functions.

use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

pub const CALLBACK_URL_PATTERN: &str = r"(?i)^(https?://)[^\s/$.?#].[^\s]*$";

fn callback_url_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(CALLBACK_URL_PATTERN).expect("callback URL pattern is valid"))
}

/// Resolves `input` against the current working directory.
pub fn absolute_path(input: &str) -> Result<PathBuf, String> {
    let path = Path::new(input.trim());
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| format!("Unable to resolve the current directory: {}", e))
}

/// Accepts a path to an existing file and returns it as an absolute path.
pub fn existing_file(input: &str) -> Result<PathBuf, String> {
    if input.trim().is_empty() {
        return Err("File does not exist. Please provide a valid path.".to_string());
    }
    let path = absolute_path(input)?;
    if path.is_file() {
        Ok(path)
    } else {
        Err("File does not exist. Please provide a valid path.".to_string())
    }
}

pub fn non_empty(input: &str, label: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(format!("{} can't be empty.", label))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn callback_url(input: &str) -> Result<String, String> {
    if callback_url_regex().is_match(input) {
        Ok(input.to_string())
    } else {
        Err("Please enter a valid URL.".to_string())
    }
}

/// Resource IDs become path segments of API names and must not contain spaces.
pub fn resource_id(input: &str) -> Result<String, String> {
    if input.is_empty() {
        Err("Invalid name. Name can't be empty.".to_string())
    } else if input.chars().any(char::is_whitespace) {
        Err("Invalid name. Name can't include spaces.".to_string())
    } else {
        Ok(input.to_string())
    }
}

/// Splits `key=value` at the first `=`, trimming both sides.
pub fn key_value(input: &str) -> Result<(String, String), String> {
    let invalid = || "Invalid format. Use: amdm config --add \"key=value\"".to_string();
    let (key, value) = input.split_once('=').ok_or_else(invalid)?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return Err(invalid());
    }
    Ok((key.to_string(), value.to_string()))
}

/// Reads a file that must hold a JSON object, used as a request body.
pub fn json_object_file(path: &Path) -> Result<serde_json::Value, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Unable to read {}: {}", path.display(), e))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| format!("{} is not valid JSON: {}", path.display(), e))?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(format!("{} must contain a JSON object.", path.display()))
    }
}
