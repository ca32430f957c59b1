// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast provider configuration, including loading and
//! saving preferences to a `toasts.toml` file.
//!
//! # Configuration Sections
//!
//! - `[queue]` - Visible capacity, default duration and default anchor
//! - `[appearance]` - Theme mode used to pick the light or dark palette
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `ICED_TOASTS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.queue.max_visible = Some(5);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::{ToastDuration, ToastPosition};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toasts.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToasts";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOASTS_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Queue and lifecycle settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueConfig {
    /// Maximum number of toasts visible at once.
    #[serde(
        default = "default_max_visible",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_visible: Option<usize>,

    /// Auto-dismiss duration applied when a request sets none (ms, 0 = never).
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Screen anchor applied when a request sets none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_position: Option<ToastPosition>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            default_duration_ms: default_duration_ms(),
            default_position: Some(ToastPosition::default()),
        }
    }
}

/// Visual settings handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppearanceConfig {
    /// Theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Toast provider configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub queue: QueueConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Effective visible capacity, clamped to the supported range.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.queue
            .max_visible
            .unwrap_or(DEFAULT_MAX_VISIBLE)
            .clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE)
    }

    /// Effective default duration; zero maps to [`ToastDuration::Infinite`].
    #[must_use]
    pub fn default_duration(&self) -> ToastDuration {
        ToastDuration::from_millis(self.queue.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS))
    }

    /// Effective default anchor.
    #[must_use]
    pub fn default_position(&self) -> ToastPosition {
        self.queue.default_position.unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE)
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the explicit override first and the
/// environment variable second.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default toast config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
