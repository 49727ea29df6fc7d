//! CLI configuration.
//!
//! Read once from the environment at start-up and passed to the handlers
//! that need it.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use qms_autosave::DEFAULT_DELAY;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/dashboard";
pub const DEFAULT_PREFS_PATH: &str = ".qms/preferences.json";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the `qms` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Dashboard URL that bare query strings are resolved against.
    pub base_url: Url,
    /// Quiet period for `qms autosave`.
    pub autosave_delay: Duration,
    /// Preferences file.
    pub prefs_path: PathBuf,
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `QMS_BASE_URL` (default: `http://localhost:3000/dashboard`)
    /// - `QMS_AUTOSAVE_DELAY_MS` (default: 30000)
    /// - `QMS_PREFS_PATH` (default: `.qms/preferences.json`)
    /// - `QMS_LOG_FORMAT`, `text` or `json` (default: `text`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = match lookup("QMS_BASE_URL") {
            Some(raw) => Url::parse(&raw)
                .map_err(|e| ConfigError::InvalidUrl("QMS_BASE_URL".to_string(), e.to_string()))?,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| {
                ConfigError::InvalidUrl("QMS_BASE_URL".to_string(), e.to_string())
            })?,
        };

        let autosave_delay = match lookup("QMS_AUTOSAVE_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay(raw))?,
            None => DEFAULT_DELAY,
        };

        let prefs_path = lookup("QMS_PREFS_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH));

        let log_format = match lookup("QMS_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        Ok(Self {
            base_url,
            autosave_delay,
            prefs_path,
            log_format,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("QMS_AUTOSAVE_DELAY_MS must be a whole number of milliseconds, got {0:?}")]
    InvalidDelay(String),
    #[error("QMS_LOG_FORMAT must be \"text\" or \"json\", got {0:?}")]
    InvalidLogFormat(String),
}
