//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for the node API
//! endpoint, with automatic load/save to disk and environment-variable
//! overrides for deployments that cannot ship a config file.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/wallethist/config.json`
//! - macOS: `~/Library/Application Support/wallethist/config.json`
//! - Windows: `%APPDATA%/wallethist/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::config::AppConfig;
//!
//! // Load existing config (file + env overrides) or use defaults
//! let config = AppConfig::load();
//! let client = HistoryClient::new(config.base_url());
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::constants::{DEFAULT_API_HOST, DEFAULT_API_PORT, ENV_API_HOST, ENV_API_PORT};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "wallethist";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// This structure is serialized to JSON and stored in the user's
/// configuration directory.
///
/// # Fields
///
/// * `api_host` - Host of the node's HTTP API
/// * `api_port` - Port of the node's HTTP API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Host of the node's HTTP API.
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// Port of the node's HTTP API.
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

const fn default_api_port() -> u16 {
    DEFAULT_API_PORT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            api_port: DEFAULT_API_PORT,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration.
    ///
    /// Reads the config file if present, then applies environment-variable
    /// overrides. If the file doesn't exist or cannot be parsed, the
    /// defaults are used as the base.
    ///
    /// # Returns
    ///
    /// The effective configuration.
    #[must_use]
    pub fn load() -> Self {
        let mut config: Self = Self::config_path()
            .ok()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();

        config.apply_overrides(env::var(ENV_API_HOST).ok(), env::var(ENV_API_PORT).ok());
        config
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config path cannot be resolved or the file
    /// cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Applies host/port overrides on top of the current values.
    ///
    /// Empty host values and unparseable ports are ignored with a warning;
    /// a misconfigured environment should not take the history view down.
    ///
    /// # Arguments
    ///
    /// * `host` - Override for the API host, if any
    /// * `port` - Override for the API port (decimal text), if any
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) {
        if let Some(host) = host {
            if host.is_empty() {
                warn!("ignoring empty API host override");
            } else {
                self.api_host = host;
            }
        }
        if let Some(port) = port {
            match port.parse::<u16>() {
                Ok(parsed) => self.api_port = parsed,
                Err(_) => warn!(value = %port, "ignoring unparseable API port override"),
            }
        }
    }

    /// Returns the base URL of the node's HTTP API.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.api_host, self.api_port)
    }
}

// ============================================================================
// Tests
// ============================================================================
