//! # User Preferences
//!
//! Market, role and locale, persisted as JSON. [`PreferencesStore`] is the
//! single handle to them: it is opened once by the composition root and
//! passed to whoever needs it. Every [`PreferencesStore::update`] writes
//! through to disk before returning.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CliConfig;
use crate::print_json;

// ─── Model ───────────────────────────────────────────────────────────

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            _ => Err(format!("unsupported locale {s:?} (expected fr or en)")),
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Regulatory market the dashboards are tuned for.
    pub market: String,
    /// Role of the signed-in user (auditor, quality manager, …).
    pub role: String,
    pub locale: Locale,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            market: "eu".to_string(),
            role: "auditor".to_string(),
            locale: Locale::Fr,
        }
    }
}

/// Errors reading or writing the preferences file.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("failed to access preferences file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("preferences file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// ─── Store ───────────────────────────────────────────────────────────

/// Write-through handle to the preferences file.
#[derive(Debug)]
pub struct PreferencesStore {
    path: PathBuf,
    current: Preferences,
}

impl PreferencesStore {
    /// Load preferences from `path`. A missing file yields the defaults and
    /// is not created until the first update.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let current = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| PrefsError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no preferences file, using defaults");
                Preferences::default()
            }
            Err(source) => return Err(PrefsError::Io { path, source }),
        };
        Ok(Self { path, current })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> &Preferences {
        &self.current
    }

    /// Apply `change` and persist the result. On a write failure the
    /// in-memory preferences are left as they were.
    pub fn update(&mut self, change: impl FnOnce(&mut Preferences)) -> Result<&Preferences, PrefsError> {
        let mut next = self.current.clone();
        change(&mut next);
        self.write(&next)?;
        self.current = next;
        tracing::info!(path = %self.path.display(), "preferences saved");
        Ok(&self.current)
    }

    fn write(&self, prefs: &Preferences) -> Result<(), PrefsError> {
        let io_err = |source| PrefsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(prefs).map_err(|source| PrefsError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(io_err)
    }
}

// ─── Subcommand ──────────────────────────────────────────────────────

/// Preferences subcommand arguments.
#[derive(Args, Debug)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsCommand,
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommand {
    /// Print the current preferences.
    Show,
    /// Change one or more preferences and save them.
    Set {
        #[arg(long)]
        market: Option<String>,
        #[arg(long)]
        role: Option<String>,
        /// fr or en.
        #[arg(long)]
        locale: Option<Locale>,
    },
}

/// Execute the prefs subcommand.
pub fn run_prefs(args: &PrefsArgs, config: &CliConfig) -> Result<u8> {
    let mut store = PreferencesStore::open(&config.prefs_path)
        .with_context(|| format!("failed to open preferences at {}", config.prefs_path.display()))?;
    match &args.command {
        PrefsCommand::Show => print_json(store.get())?,
        PrefsCommand::Set {
            market,
            role,
            locale,
        } => {
            let updated = store.update(|prefs| {
                if let Some(market) = market {
                    prefs.market = market.clone();
                }
                if let Some(role) = role {
                    prefs.role = role.clone();
                }
                if let Some(locale) = locale {
                    prefs.locale = *locale;
                }
            })?;
            print_json(updated)?;
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parses_case_insensitively() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" fr ".parse::<Locale>().unwrap(), Locale::Fr);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"locale":"en"}"#).unwrap();
        assert_eq!(prefs.locale, Locale::En);
        assert_eq!(prefs.role, "auditor");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "market": "eu", "role": "auditor", "locale": "fr" })
        );
    }
}
