//! Finding, reading and resolving the translator settings for one run.

use std::io::ErrorKind;
use std::path::{
    Path,
    PathBuf,
};
use std::time::Duration;

use super::{
    ConfigError,
    TranslatorSettings,
};

/// Settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".word-translator.json";

/// Directory to search for [`CONFIG_FILE_NAME`], given the result of the
/// working-directory lookup.
///
/// An unreadable working directory is logged and yields `None`, so the run
/// continues on default settings.
#[must_use]
pub fn settings_dir(current_dir: std::io::Result<PathBuf>) -> Option<PathBuf> {
    match current_dir {
        Ok(dir) => Some(dir),
        Err(error) => {
            tracing::warn!(%error, "Cannot read the working directory, using default settings");
            None
        }
    }
}

/// Settings in effect for this run.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Validated settings.
    settings: TranslatorSettings,

    /// Base for a relative `dictionaryPath`.
    config_dir: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and validate the settings file in `config_dir`.
    ///
    /// No directory, or a directory without the file, means default settings.
    /// On any error the previously loaded settings stay in effect.
    pub fn load_settings(&mut self, config_dir: Option<PathBuf>) -> Result<(), ConfigError> {
        let settings = match &config_dir {
            Some(dir) => read_settings_file(&dir.join(CONFIG_FILE_NAME))?,
            None => TranslatorSettings::default(),
        };
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!(?config_dir, ?settings, "Settings loaded");
        self.settings = settings;
        self.config_dir = config_dir;
        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &TranslatorSettings {
        &self.settings
    }

    /// Dictionary file to load, or `None` for the bundled dictionary.
    ///
    /// Relative paths are joined onto the directory the settings came from.
    #[must_use]
    pub fn dictionary_path(&self) -> Option<PathBuf> {
        let path = self.settings.dictionary_path.as_deref()?;
        match &self.config_dir {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            Some(_) | None => Some(path.to_path_buf()),
        }
    }

    #[must_use]
    pub const fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.settings.simulated_latency_ms)
    }
}

/// Parse one settings file; a missing file means defaults.
fn read_settings_file(path: &Path) -> Result<TranslatorSettings, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No settings file");
            return Ok(TranslatorSettings::default());
        }
        Err(error) => return Err(error.into()),
    };

    Ok(serde_json::from_str(&content)?)
}
