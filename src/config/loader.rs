//! `t9n.config.json` reading and writing

use std::path::Path;

use super::{
    ConfigError,
    T9nSettings,
};

/// File name of the configuration inside the working directory.
pub const CONFIG_FILE_NAME: &str = "t9n.config.json";

/// Reads `t9n.config.json` from `dir`.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: there is no configuration file
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<T9nSettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Configuration file not found");
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "Loading configuration");

    let content = std::fs::read_to_string(&config_path)?;
    let settings: T9nSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// Writes `settings` as pretty JSON to `dir/t9n.config.json`.
pub(super) fn save_to_dir(dir: &Path, settings: &T9nSettings) -> Result<(), ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let mut content = serde_json::to_string_pretty(settings)?;
    content.push('\n');
    std::fs::write(&config_path, content)?;
    tracing::debug!(path = %config_path.display(), "Configuration written");
    Ok(())
}
