//! # Filter Session
//!
//! Owns the canonical filter state of one dashboard and keeps the address
//! bar in step with it.
//!
//! ```text
//! initialize(defaults, bar) ── parse bar.query() once over defaults
//!        │
//!        ▼
//!   replace / update ──▶ state = next; bar.replace_query(to_query(next))
//!        │
//!        ▼
//!      reset ──────────▶ replace(defaults)
//! ```

use crate::address::AddressBar;
use crate::codec::{parse_query, to_query};
use crate::state::FilterState;

/// Filter state bound to an address bar.
#[derive(Debug)]
pub struct FilterSession<A: AddressBar> {
    defaults: FilterState,
    state: FilterState,
    address_bar: A,
}

impl<A: AddressBar> FilterSession<A> {
    /// Parse the address bar's current query over `defaults`.
    ///
    /// The address bar is not written until the first update.
    pub fn initialize(defaults: FilterState, address_bar: A) -> Self {
        let state = parse_query(&address_bar.query(), &defaults);
        tracing::debug!(
            active_filters = state.active_filter_count(),
            "filter session initialized from URL"
        );
        Self {
            defaults,
            state,
            address_bar,
        }
    }

    /// The current filters.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The filters `reset` returns to.
    pub fn defaults(&self) -> &FilterState {
        &self.defaults
    }

    pub fn address_bar(&self) -> &A {
        &self.address_bar
    }

    /// Replace the whole filter state.
    pub fn replace(&mut self, next: FilterState) {
        let query = to_query(&next);
        tracing::debug!(%query, "filters updated");
        self.address_bar.replace_query(&query);
        self.state = next;
    }

    /// Derive the next state from the current one.
    pub fn update(&mut self, f: impl FnOnce(&FilterState) -> FilterState) {
        let next = f(&self.state);
        self.replace(next);
    }

    /// Back to the defaults. The defaults are written to the URL like any
    /// other update.
    pub fn reset(&mut self) {
        self.replace(self.defaults.clone());
    }

    /// The URL to share for the current view.
    pub fn shareable_url(&self) -> String {
        self.address_bar.href()
    }

    /// Give the address bar back.
    pub fn into_address_bar(self) -> A {
        self.address_bar
    }
}
