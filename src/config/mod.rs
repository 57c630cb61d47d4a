// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences from `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[search]` - Search endpoint, initial row count, request timeout
//! - `[viewer]` - Initial visibility of the list and icon surfaces
//!
//! The search endpoint has no built-in value: until one is configured the
//! search bar builds queries but sends nothing.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ja").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Outbound search settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// URL the serialized query is POSTed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Value pre-filled in the rows field of the details panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rows: Option<u32>,

    /// Timeout for manifest and search requests (seconds).
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            default_rows: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SearchConfig {
    /// Configured endpoint, ignoring blank values.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Initial text of the rows field.
    #[must_use]
    pub fn rows_input(&self) -> String {
        self.default_rows
            .map_or_else(|| DEFAULT_ROWS_INPUT.to_string(), |rows| rows.to_string())
    }

    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Initial presentation of a freshly opened viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default = "default_list_visible", skip_serializing_if = "Option::is_none")]
    pub list_visible: Option<bool>,

    #[serde(default = "default_icon_visible", skip_serializing_if = "Option::is_none")]
    pub icon_visible: Option<bool>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            list_visible: default_list_visible(),
            icon_visible: default_icon_visible(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_list_visible() -> Option<bool> {
    Some(DEFAULT_LIST_VISIBLE)
}

fn default_icon_visible() -> Option<bool> {
    Some(DEFAULT_ICON_VISIBLE)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
