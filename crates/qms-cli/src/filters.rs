//! # Filters CLI: Inspect and rewrite shareable dashboard URLs.
//!
//! ## Usage
//!
//! ```bash
//! # What does this link filter on?
//! qms filters show 'https://qms.example/dashboard?siteIds=lyon&status=open'
//!
//! # Narrow it and get the new link. A bare query is resolved against
//! # QMS_BASE_URL.
//! qms filters set '?siteIds=lyon' --referential iso-13485 --status ''
//! ```
//!
//! An empty flag value (`--status ''`) clears that filter.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use url::Url;

use qms_core::FilterDate;
use qms_filter::{FilterSession, FilterState, MemoryAddressBar};

use crate::config::CliConfig;
use crate::print_json;

/// Filters subcommand arguments.
#[derive(Args, Debug)]
pub struct FiltersArgs {
    #[command(subcommand)]
    pub command: FiltersCommand,
}

#[derive(Subcommand, Debug)]
pub enum FiltersCommand {
    /// Print the filters carried by a URL.
    Show {
        /// Full URL, or a query string resolved against QMS_BASE_URL.
        url: String,
    },
    /// Change filters and print the new shareable URL.
    Set {
        /// Full URL, or a query string resolved against QMS_BASE_URL.
        url: String,

        #[command(flatten)]
        changes: FilterChanges,

        /// Start from no filters instead of the URL's filters.
        #[arg(long)]
        clear: bool,
    },
}

/// Per-field overrides. `None` keeps the current value; an empty string or
/// empty list clears it.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterChanges {
    #[arg(long)]
    pub period: Option<String>,
    /// YYYY-MM-DD or RFC 3339.
    #[arg(long)]
    pub start_date: Option<String>,
    /// YYYY-MM-DD or RFC 3339.
    #[arg(long)]
    pub end_date: Option<String>,
    /// Site ids, comma separated.
    #[arg(long = "site", value_delimiter = ',', num_args = 0..)]
    pub sites: Option<Vec<String>>,
    /// Process ids, comma separated.
    #[arg(long = "process", value_delimiter = ',', num_args = 0..)]
    pub processes: Option<Vec<String>>,
    /// Referential ids, comma separated.
    #[arg(long = "referential", value_delimiter = ',', num_args = 0..)]
    pub referentials: Option<Vec<String>>,
    #[arg(long)]
    pub audit_type: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterChanges {
    /// The state after applying these changes to `prev`.
    pub fn apply(&self, prev: &FilterState) -> FilterState {
        let mut next = prev.clone();
        set_text(&mut next.period, &self.period);
        set_date(&mut next.start_date, &self.start_date);
        set_date(&mut next.end_date, &self.end_date);
        set_ids(&mut next.site_ids, &self.sites);
        set_ids(&mut next.process_ids, &self.processes);
        set_ids(&mut next.referential_ids, &self.referentials);
        set_text(&mut next.audit_type, &self.audit_type);
        set_text(&mut next.status, &self.status);
        set_text(&mut next.search, &self.search);
        next
    }
}

fn set_text(field: &mut Option<String>, change: &Option<String>) {
    if let Some(value) = change {
        *field = (!value.is_empty()).then(|| value.clone());
    }
}

fn set_date(field: &mut Option<FilterDate>, change: &Option<String>) {
    if let Some(value) = change {
        *field = (!value.is_empty()).then(|| FilterDate::parse(value));
    }
}

fn set_ids(field: &mut Vec<String>, change: &Option<Vec<String>>) {
    if let Some(ids) = change {
        *field = ids.iter().filter(|id| !id.is_empty()).cloned().collect();
    }
}

/// Address bar for `input`: a full URL as is, anything else taken as a
/// query string on `base`.
pub fn address_bar(input: &str, base: &Url) -> Result<MemoryAddressBar> {
    match Url::parse(input) {
        Ok(url) => Ok(MemoryAddressBar::new(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let mut url = base.clone();
            let query = input.trim_start_matches('?');
            url.set_query((!query.is_empty()).then_some(query));
            Ok(MemoryAddressBar::new(url))
        }
        Err(e) => Err(e).with_context(|| format!("invalid dashboard URL {input:?}")),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FiltersReport<'a> {
    url: String,
    active_filters: usize,
    filters: &'a FilterState,
}

/// Execute the filters subcommand.
pub fn run_filters(args: &FiltersArgs, config: &CliConfig) -> Result<u8> {
    let session = match &args.command {
        FiltersCommand::Show { url } => {
            FilterSession::initialize(FilterState::default(), address_bar(url, &config.base_url)?)
        }
        FiltersCommand::Set {
            url,
            changes,
            clear,
        } => set_filters(url, changes, *clear, &config.base_url)?,
    };
    print_json(&FiltersReport {
        url: session.shareable_url(),
        active_filters: session.state().active_filter_count(),
        filters: session.state(),
    })?;
    Ok(0)
}

/// Open `url`, optionally clear it, then apply `changes`.
pub fn set_filters(
    url: &str,
    changes: &FilterChanges,
    clear: bool,
    base: &Url,
) -> Result<FilterSession<MemoryAddressBar>> {
    let mut session = FilterSession::initialize(FilterState::default(), address_bar(url, base)?);
    if clear {
        session.reset();
    }
    session.update(|prev| changes.apply(prev));
    Ok(session)
}
