//! Client configuration
//!
//! The API key only ever comes from the environment. Everything else
//! (base URL, timeout, user agent) has a sensible default and can be
//! overridden from `~/.config/nexuscat/config.toml` or the environment.

use crate::error::NexusError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the pre-issued API key
pub const API_KEY_ENV: &str = "NEXUS_API_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "NEXUS_API_BASE_URL";

/// Public Nexus Mods API root
pub const DEFAULT_BASE_URL: &str = "https://api.nexusmods.com/v1";

/// The only game domain this tool inspects
pub const GAME_DOMAIN: &str = "baldursgate3";

/// Per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_DIR: &str = "nexuscat";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Overrides the `nexuscat/<version>` user agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self, NexusError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit file. A missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self, NexusError> {
        let content = fs::read_to_string(path).map_err(|e| NexusError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| NexusError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `NEXUS_API_BASE_URL` if set
    pub fn with_env_overrides(self) -> Self {
        self.with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self
    }

    /// Base URL without a trailing slash
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("nexuscat/{}", env!("CARGO_PKG_VERSION")))
    }
}

/// Default config file path (`$XDG_CONFIG_HOME/nexuscat/config.toml`)
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Read the API key from `NEXUS_API_KEY`
pub fn api_key_from_env() -> Result<String, NexusError> {
    api_key_from(std::env::var(API_KEY_ENV).ok())
}

fn api_key_from(value: Option<String>) -> Result<String, NexusError> {
    match value {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(NexusError::MissingApiKey),
    }
}
