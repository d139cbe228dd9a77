use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::LanguageTag;

/// Upper bound for `simulatedLatencyMs`.
pub const MAX_SIMULATED_LATENCY_MS: u64 = 60_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "dictionaryPath")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Errors raised while loading or updating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered, one error per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of `.word-translator.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorSettings {
    /// Dictionary JSON file, relative to the configuration directory.
    /// If unset, the bundled dictionary is used.
    pub dictionary_path: Option<PathBuf>,

    /// Artificial delay of the batch API, in milliseconds.
    pub simulated_latency_ms: u64,

    /// Source language assumed by the console.
    ///
    /// - `None`: the console asks for it (default)
    /// - `Some(tag)`: the "translate from" prompt is skipped
    pub default_source_language: Option<LanguageTag>,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self { dictionary_path: None, simulated_latency_ms: 10, default_source_language: None }
    }
}

impl TranslatorSettings {
    /// # Errors
    /// - Dictionary path is empty
    /// - Latency is out of range
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(path) = &self.dictionary_path
            && path.as_os_str().is_empty()
        {
            errors.push(ValidationError::new(
                "dictionaryPath",
                "The path cannot be empty. Please specify a JSON file (e.g., \"translations.json\"), or remove this field",
            ));
        }

        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            errors.push(ValidationError::new(
                "simulatedLatencyMs",
                format!(
                    "The latency must be at most {MAX_SIMULATED_LATENCY_MS} ms, got {}",
                    self.simulated_latency_ms
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
