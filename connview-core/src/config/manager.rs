//! Settings manager for TOML file operations
//!
//! This module provides the `SettingsManager` which handles loading and
//! saving the durable catalog settings. Writes are synchronous and small;
//! they may block briefly on storage I/O, which is acceptable on this path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

use super::settings::CatalogSettings;

/// File name of the settings file
const CONFIG_FILE: &str = "config.toml";

/// Settings manager for `ConnView`
///
/// Settings are stored in `~/.config/connview/` by default.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    /// Base directory for the settings file
    config_dir: PathBuf,
}

impl SettingsManager {
    /// Creates a new `SettingsManager` with the default configuration
    /// directory
    ///
    /// # Errors
    ///
    /// Returns an error if the user configuration directory cannot be
    /// determined.
    pub fn new() -> SettingsResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SettingsError::NotFound(PathBuf::from("~/.config")))?
            .join("connview");
        Ok(Self { config_dir })
    }

    /// Creates a new `SettingsManager` with a custom configuration directory
    ///
    /// This is useful for testing or non-standard configurations.
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the configuration directory path
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Ensures the configuration directory exists
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> SettingsResult<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir).map_err(|e| {
                SettingsError::Write(format!(
                    "Failed to create config directory {}: {}",
                    self.config_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Loads the catalog settings
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_settings(&self) -> SettingsResult<CatalogSettings> {
        let path = self.config_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(CatalogSettings::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            SettingsError::Parse(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            SettingsError::Deserialize(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Saves the catalog settings
    ///
    /// Creates the configuration directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_settings(&self, settings: &CatalogSettings) -> SettingsResult<()> {
        self.ensure_config_dir()?;
        let path = self.config_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(settings)
            .map_err(|e| SettingsError::Serialize(format!("Failed to serialize: {e}")))?;

        fs::write(&path, content).map_err(|e| {
            SettingsError::Write(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}
