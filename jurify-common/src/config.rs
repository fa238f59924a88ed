//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default backend address (Flask development default)
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Environment variable naming the backend address
pub const SERVER_ENV_VAR: &str = "JURIFY_SERVER";

/// Environment variable naming the local data directory
pub const DATA_DIR_ENV_VAR: &str = "JURIFY_DATA_DIR";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub server_url: Option<String>,
    pub data_dir: Option<String>,
    /// Response language code (en/hi/mr/ta/bn)
    pub language: Option<String>,
    /// Enable the typewriter reveal when rendering results
    pub typewriter: Option<bool>,
    /// External command whose stdout becomes dictated issue text
    pub transcriber_command: Option<String>,
}

impl ConfigFile {
    /// Load the config file if present; missing file yields defaults
    pub fn load() -> Result<Self> {
        match config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse a specific TOML file
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// Get the platform config file path (`<config dir>/jurify/config.toml`)
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("jurify").join("config.toml"))
}

/// Get the platform locale directory (`<config dir>/jurify/locales`)
pub fn locale_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("jurify").join("locales"))
}

/// Resolve the backend server URL following the priority order
pub fn resolve_server_url(cli_arg: Option<&str>, config: &ConfigFile) -> String {
    if let Some(url) = cli_arg {
        return url.trim_end_matches('/').to_string();
    }

    if let Ok(url) = std::env::var(SERVER_ENV_VAR) {
        if !url.trim().is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    if let Some(url) = &config.server_url {
        return url.trim_end_matches('/').to_string();
    }

    DEFAULT_SERVER_URL.to_string()
}

/// Resolve the local data directory following the priority order
pub fn resolve_data_dir(cli_arg: Option<&str>, config: &ConfigFile) -> PathBuf {
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var(DATA_DIR_ENV_VAR) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.data_dir {
        return PathBuf::from(path);
    }

    get_default_data_dir()
}

/// Get OS-dependent default data directory
fn get_default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("jurify"))
        .unwrap_or_else(|| PathBuf::from("./jurify_data"))
}
