//! Configuration module for descsync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DESCSYNC_*)
//! 3. Explicit config file (`--config`), else `./descsync.toml`, else the
//!    user config (`<config dir>/descsync/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{default_store_path, ConfigError, ConfigResult, ConfigWarning};
pub use types::{Config, LogFormat, LoggingConfig, StoreConfig, SyncConfig};
