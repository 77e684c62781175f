//! First-run setup and credential health check.
//!
//! Both flows are an ordered list of [`PromptStep`]s: ask, apply the default
//! for blank answers, validate, and re-ask until the answer is accepted. The
//! terminal interaction sits behind [`Prompter`] so the flows can be driven
//! without a TTY.

use crate::{
    configuration::{
        Configuration, ConfigurationError, DEFAULT_CALLBACK_URL, KEY_CALLBACK_URL, KEY_PROJECT_ID,
        KEY_SERVICE_ACCOUNT_KEY,
    },
    validation,
};
use color_print::cprintln;
use inquire::validator::Validation;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("setup aborted: {0}")]
    Aborted(String),
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),
}

impl From<inquire::InquireError> for SetupError {
    fn from(error: inquire::InquireError) -> Self {
        SetupError::Aborted(error.to_string())
    }
}

/// A single question of an interactive flow.
#[derive(Debug, Clone, Copy)]
pub struct PromptStep {
    pub key: &'static str,
    pub message: &'static str,
    pub default: Option<&'static str>,
    pub validate: fn(&str) -> Result<String, String>,
}

fn validate_key_path(input: &str) -> Result<String, String> {
    validation::existing_file(input).map(|path| path.to_string_lossy().into_owned())
}

fn validate_project_id(input: &str) -> Result<String, String> {
    validation::non_empty(input, "PROJECT_ID")
}

pub const SERVICE_ACCOUNT_KEY_STEP: PromptStep = PromptStep {
    key: KEY_SERVICE_ACCOUNT_KEY,
    message: "Enter the path to your service account key file:",
    default: None,
    validate: validate_key_path,
};

pub const PROJECT_ID_STEP: PromptStep = PromptStep {
    key: KEY_PROJECT_ID,
    message: "Enter your Google Cloud project ID:",
    default: None,
    validate: validate_project_id,
};

pub const CALLBACK_URL_STEP: PromptStep = PromptStep {
    key: KEY_CALLBACK_URL,
    message: "Enter the callback URL. This URL is used during signup URL creation:",
    default: Some(DEFAULT_CALLBACK_URL),
    validate: validation::callback_url,
};

pub const SETUP_STEPS: [PromptStep; 3] =
    [SERVICE_ACCOUNT_KEY_STEP, PROJECT_ID_STEP, CALLBACK_URL_STEP];

pub trait Prompter {
    /// Returns the raw answer to `step`, or an error if input is unavailable.
    fn prompt(&mut self, step: &PromptStep) -> Result<String, SetupError>;

    /// Reports a rejected answer before the step is asked again.
    fn reject(&mut self, _step: &PromptStep, message: &str) {
        cprintln!("<red>{}</red>", message);
    }
}

/// Terminal prompts backed by `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn prompt(&mut self, step: &PromptStep) -> Result<String, SetupError> {
        let validate = step.validate;
        let mut text = inquire::Text::new(step.message).with_validator(
            move |input: &str| -> Result<Validation, inquire::CustomUserError> {
                Ok(match validate(input) {
                    Ok(_) => Validation::Valid,
                    Err(message) => Validation::Invalid(message.into()),
                })
            },
        );
        if let Some(default) = step.default {
            text = text.with_default(default);
        }
        Ok(text.prompt()?)
    }

    // inquire already shows the validator's message inline.
    fn reject(&mut self, _step: &PromptStep, message: &str) {
        warn!("Rejected answer: {}", message);
    }
}

/// Asks `step` until its validator accepts the answer.
pub fn ask(prompter: &mut dyn Prompter, step: &PromptStep) -> Result<String, SetupError> {
    loop {
        let answer = prompter.prompt(step)?;
        let answer = match step.default {
            Some(default) if answer.trim().is_empty() => default.to_string(),
            _ => answer,
        };

        match (step.validate)(&answer) {
            Ok(value) => return Ok(value),
            Err(message) => prompter.reject(step, &message),
        }
    }
}

/// Collects credentials, project and callback URL, merges them into
/// `configuration` and saves the result to `path`.
pub fn run_interactive_setup(
    configuration: &mut Configuration,
    prompter: &mut dyn Prompter,
    path: &Path,
) -> Result<(), SetupError> {
    debug!("Running interactive setup");
    for step in SETUP_STEPS.iter() {
        let value = ask(prompter, step)?;
        configuration.set(step.key, value);
    }
    configuration.save(path)?;
    cprintln!("<green>Configuration saved to {}</green>", path.display());
    Ok(())
}

/// Re-prompts for the service account key when the stored path no longer
/// points at a file. Returns whether the configuration was changed.
pub fn check_credentials(
    configuration: &mut Configuration,
    prompter: &mut dyn Prompter,
    path: &Path,
) -> Result<bool, SetupError> {
    if let Some(key) = configuration.service_account_key() {
        if key.is_file() {
            return Ok(false);
        }
        warn!("Service account key {} is missing", key.display());
        cprintln!(
            "<yellow>Service account key file '{}' does not exist anymore.</yellow>",
            key.display()
        );
    }

    let value = ask(prompter, &SERVICE_ACCOUNT_KEY_STEP)?;
    configuration.set(KEY_SERVICE_ACCOUNT_KEY, value);
    configuration.save(path)?;
    Ok(true)
}

/// Brings `configuration` to a usable state: setup when incomplete, then the
/// credential check.
pub fn ensure_ready(
    configuration: &mut Configuration,
    prompter: &mut dyn Prompter,
    path: &Path,
) -> Result<(), SetupError> {
    if !configuration.is_complete() {
        run_interactive_setup(configuration, prompter, path)?;
    }
    check_credentials(configuration, prompter, path)?;
    Ok(())
}
