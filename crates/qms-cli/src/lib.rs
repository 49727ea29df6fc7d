//! # qms-cli: Audit Workbench Command-Line Interface
//!
//! Thin handlers over the library crates. Every subcommand prints JSON on
//! stdout; logs go to stderr.
//!
//! ## Subcommands
//!
//! - `filters`: read and rewrite shareable dashboard filter URLs
//! - `funnel`: build a drill-down path and show its stage and scope
//! - `documents`: mandatory documents for a process and referential
//! - `autosave`: debounce-save a draft read line by line from stdin
//! - `prefs`: show or update the persisted user preferences
//!
//! ## Crate Policy
//!
//! - Argument structs live next to their handler; `main.rs` only dispatches.
//! - Handlers return `anyhow::Result<u8>`, the process exit code.
//! - Domain rules stay in the domain crates.

pub mod autosave;
pub mod config;
pub mod documents;
pub mod filters;
pub mod funnel;
pub mod prefs;

use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-print `value` as JSON on stdout.
pub(crate) fn print_json(value: &impl Serialize) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON output")?;
    println!("{rendered}");
    Ok(())
}
