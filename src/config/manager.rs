//! Configuration of the working directory

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    T9nSettings,
    loader,
};

/// Holds the validated settings of one working directory.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings
    current_settings: T9nSettings,

    /// Directory the settings were loaded from
    config_dir: Option<PathBuf>,

    /// Whether `t9n.config.json` existed when loading
    file_exists: bool,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates `t9n.config.json` from `config_dir`.
    ///
    /// Without a directory or without a file the defaults apply.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, config_dir: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!(?config_dir, "Loading settings");

        let loaded = match &config_dir {
            Some(dir) => loader::load_from_dir(dir)?,
            None => None,
        };
        self.file_exists = loaded.is_some();
        let settings = loaded.unwrap_or_default();

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.config_dir = config_dir;
        tracing::debug!(settings = ?self.current_settings, "Settings loaded");

        Ok(())
    }

    /// Writes the settings to `t9n.config.json` when the file did not exist,
    /// so later runs pick up the same defaults. Returns whether a file was
    /// written.
    ///
    /// # Errors
    /// File write error.
    pub fn persist_defaults(&mut self) -> Result<bool, ConfigError> {
        let Some(dir) = &self.config_dir else {
            return Ok(false);
        };
        if self.file_exists {
            return Ok(false);
        }

        loader::save_to_dir(dir, &self.current_settings)?;
        self.file_exists = true;
        Ok(true)
    }

    #[must_use]
    pub const fn get_settings(&self) -> &T9nSettings {
        &self.current_settings
    }

    #[must_use]
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }
}
