//! # qms-core: Foundational Types for the Audit Workbench
//!
//! Every other crate in the workspace depends on `qms-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `DrillLevelKind` enum.** The eight navigation levels of the
//!    audit funnel (organization down to corrective action) are defined once,
//!    in narrowing order. Exhaustive `match` everywhere.
//!
//! 2. **UTC-only timestamps.** [`Timestamp`] is UTC, truncated to seconds.
//!
//! 3. **Lenient filter dates.** [`FilterDate`] keeps malformed input instead
//!    of rejecting it, so that a hand-edited URL never breaks a dashboard.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `qms-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod temporal;

pub use error::QmsError;
pub use kind::DrillLevelKind;
pub use temporal::{FilterDate, Timestamp};
