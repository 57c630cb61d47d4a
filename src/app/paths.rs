// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions
//! 2. **Environment variables** (`IIIF_VIEWER_DATA_DIR`, `IIIF_VIEWER_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "IIIFViewer";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "IIIF_VIEWER_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "IIIF_VIEWER_CONFIG_DIR";

const LOG_FILE: &str = "viewer.log";

fn resolve(override_path: Option<PathBuf>, env_var: &str, base: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    base.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application data directory (logs live here).
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_DATA_DIR, dirs::data_dir())
}

/// Returns the directory holding `settings.toml`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_CONFIG_DIR, dirs::config_dir())
}

/// Default log file location inside the data directory.
pub fn default_log_file() -> Option<PathBuf> {
    get_app_data_dir_with_override(None).map(|mut path| {
        path.push("logs");
        path.push(LOG_FILE);
        path
    })
}
