//! # qms-filter: Dashboard Filter Persistence
//!
//! Dashboard filters live in the page URL so that a filtered view can be
//! bookmarked or shared. This crate owns the canonical in-memory
//! [`FilterState`] and keeps the address bar in sync with it.
//!
//! ## Query format
//!
//! | Key              | Value                         |
//! |------------------|-------------------------------|
//! | `period`         | free text                     |
//! | `startDate`      | `YYYY-MM-DD`                  |
//! | `endDate`        | `YYYY-MM-DD`                  |
//! | `siteIds`        | comma-joined ids              |
//! | `processIds`     | comma-joined ids              |
//! | `referentialIds` | comma-joined ids              |
//! | `auditType`      | free text                     |
//! | `status`         | free text                     |
//! | `search`         | free text                     |
//!
//! Ids are not escaped inside a list: an id containing a comma comes back
//! as two ids, and empty ids are dropped.
//!
//! Empty or absent fields are never written. Unknown keys are ignored on
//! the way in and dropped on the way out. Values are not validated: a
//! malformed date is kept as [`FilterDate::Invalid`](qms_core::FilterDate).
//!
//! ## Modules
//!
//! - [`state`]: the [`FilterState`] record.
//! - [`codec`]: [`parse_query`] / [`to_query`].
//! - [`address`]: the [`AddressBar`] seam and an in-memory implementation.
//! - [`session`]: [`FilterSession`], the initialize/update/reset lifecycle.

pub mod address;
pub mod codec;
pub mod session;
pub mod state;

pub use address::{AddressBar, FilterError, MemoryAddressBar};
pub use codec::{parse_query, to_query};
pub use session::FilterSession;
pub use state::FilterState;
