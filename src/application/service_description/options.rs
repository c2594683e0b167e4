//! Synchronization options

use crate::domain::entities::{DEFAULT_DISABLED_NOTICE, DEFAULT_SERVICE_TIMEOUT};

/// Tunables for the synchronization engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Timeout given to every operation built from a parsed source.
    pub default_timeout: u32,
    /// Notice attached to newly registered (disabled) descriptions.
    pub default_disabled_notice: String,
    /// Also gate registration on the "adding services" change warning.
    pub warn_on_initial_additions: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            default_timeout: DEFAULT_SERVICE_TIMEOUT,
            default_disabled_notice: DEFAULT_DISABLED_NOTICE.to_string(),
            warn_on_initial_additions: false,
        }
    }
}

impl SyncOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_timeout(mut self, timeout: u32) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_disabled_notice(mut self, notice: impl Into<String>) -> Self {
        self.default_disabled_notice = notice.into();
        self
    }

    pub fn with_initial_addition_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_initial_additions = enabled;
        self
    }
}
