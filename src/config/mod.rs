//! `.word-translator.json` settings.
/// Settings lookup and resolved values
mod manager;
/// Configuration types and settings
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
    settings_dir,
};
pub use types::{
    ConfigError,
    MAX_SIMULATED_LATENCY_MS,
    TranslatorSettings,
    ValidationError,
};
