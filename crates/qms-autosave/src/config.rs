//! Autosave configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Quiet period before a scheduled save.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(30_000);

/// Settings for one [`AutoSave`](crate::AutoSave) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSaveConfig {
    /// Quiet period after the last change before saving.
    pub delay: Duration,
    /// When false, nothing is scheduled and `save_now` does nothing.
    pub enabled: bool,
}

impl AutoSaveConfig {
    /// Enabled, with the given delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            enabled: true,
        }
    }

    /// Builder: toggle `enabled`.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }
}
