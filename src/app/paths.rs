// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_MEME_DATA_DIR`, `ICED_MEME_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The download directory used by the export action has its own chain, see
//! [`resolve_download_dir`].

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedMeme";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_MEME_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_MEME_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI values.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        log::warn!("CLI directory overrides were already initialized");
    }
}

fn cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application data directory path.
///
/// Used as the last-resort download location when the platform has no
/// download directory.
///
/// - Linux: `~/.local/share/IcedMeme/`
/// - macOS: `~/Library/Application Support/IcedMeme/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedMeme\`
#[must_use]
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
#[must_use]
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_data_dir)
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| dirs::data_dir().map(|path| path.join(APP_NAME)))
}

/// Returns the application config directory path (holds `settings.toml`).
///
/// - Linux: `~/.config/IcedMeme/`
/// - macOS: `~/Library/Application Support/IcedMeme/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedMeme\`
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_config_dir)
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))
}

/// Directory where the exported `meme.png` is written.
///
/// 1. `configured` (the `[export] directory` setting)
/// 2. Platform download directory
/// 3. Application data directory
/// 4. Current directory
#[must_use]
pub fn resolve_download_dir(configured: Option<&Path>) -> PathBuf {
    configured
        .map(Path::to_path_buf)
        .or_else(dirs::download_dir)
        .or_else(get_app_data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
