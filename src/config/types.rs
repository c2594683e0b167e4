//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::SyncOptions;
use crate::domain::entities::{DEFAULT_DISABLED_NOTICE, DEFAULT_SERVICE_TIMEOUT};

use super::loader::{self, ConfigResult, ConfigWarning};

/// Client store configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Store root; the user data directory when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(loader::default_store_path)
    }
}

/// Synchronization engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_timeout")]
    pub default_timeout: u32,

    #[serde(default = "default_disabled_notice")]
    pub default_disabled_notice: String,

    #[serde(default)]
    pub warn_on_initial_additions: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            default_timeout: default_timeout(),
            default_disabled_notice: default_disabled_notice(),
            warn_on_initial_additions: false,
        }
    }
}

impl SyncConfig {
    pub fn options(&self) -> SyncOptions {
        SyncOptions::new()
            .with_default_timeout(self.default_timeout)
            .with_disabled_notice(self.default_disabled_notice.clone())
            .with_initial_addition_warnings(self.warn_on_initial_additions)
    }
}

fn default_timeout() -> u32 {
    DEFAULT_SERVICE_TIMEOUT
}

fn default_disabled_notice() -> String {
    DEFAULT_DISABLED_NOTICE.to_string()
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ConfigResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, a discovered file, or defaults; env applied last.
    pub fn load_or_default(explicit: Option<&Path>) -> ConfigResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (DESCSYNC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
