// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[backend]` - Gallery service origin
//! - `[export]` - Download directory for `meme.png`
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_MEME_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_meme::app::config;
//!
//! let (config, _warning) = config::load();
//! println!("backend: {}", config.backend.origin);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Gallery backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL that `/save`, `/gallery` and the stored image paths hang off.
    #[serde(default = "default_backend_origin")]
    pub origin: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            origin: default_backend_origin(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExportConfig {
    /// Directory receiving `meme.png`; platform download directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl ExportConfig {
    /// Resolved download directory.
    #[must_use]
    pub fn download_dir(&self) -> PathBuf {
        paths::resolve_download_dir(self.directory.as_deref())
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_backend_origin() -> String {
    DEFAULT_BACKEND_ORIGIN.to_string()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|path| path.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently and is created from them; an unreadable or invalid file yields the defaults plus
/// the i18n key of a warning to show.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        let config = Config::default();
        // First run: leave an editable file with every default spelled out.
        match save_to_path(&config, &path) {
            Ok(()) => log::info!("Created default config at {}", path.display()),
            Err(err) => log::debug!("No config file at {} ({err}), using defaults", path.display()),
        }
        return (config, None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            (config, None)
        }
        Err(err) => {
            log::warn!("Ignoring config file {}: {err}", path.display());
            (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.backend.origin, "http://127.0.0.1:5000");
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.export.directory, None);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.backend.origin = "https://memes.example.org".to_string();
        config.export.directory = Some(dir.path().join("exports"));

        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[backend]\norigin = \"http://10.0.0.2:8000\"\n").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.backend.origin, "http://10.0.0.2:8000");
        assert_eq!(loaded.general, GeneralConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let parsed: Config = toml::from_str("[general]\ntheme_mode = \"Light\"\n").expect("parse");
        assert_eq!(parsed.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn invalid_file_falls_back_with_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "[general\nlanguage = ").expect("write");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_file_is_silent_and_seeded_with_defaults() {
        let dir = tempdir().expect("temp dir");
        let nested = dir.path().join("nested");

        let (config, warning) = load_with_override(Some(nested.clone()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());

        let seeded = load_from_path(&nested.join(CONFIG_FILE)).expect("seeded file");
        assert_eq!(seeded, Config::default());
    }

    #[test]
    fn seeded_file_is_not_overwritten() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[backend]\norigin = \"http://10.0.0.2:8000\"\n",
        )
        .expect("write");

        let (config, _) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config.backend.origin, "http://10.0.0.2:8000");
    }
}
