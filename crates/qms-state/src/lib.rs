//! # qms-state: Drill-down Funnel Navigation
//!
//! The audit dashboards let a user narrow from the whole organization down
//! to a single corrective action:
//!
//! ```text
//! organization ─▶ site ─▶ process ─▶ referential ─▶ clause ─▶ requirement ─▶ finding ─▶ action
//! ```
//!
//! The current navigation path is a [`DrillPath`]: an owned stack that
//! enforces its own invariants instead of trusting every page to truncate
//! a `Vec` correctly.
//!
//! ## Invariants
//!
//! - Length is between 0 and [`MAX_DEPTH`].
//! - Each level is a strictly narrower [`DrillLevelKind`](qms_core::DrillLevelKind)
//!   than the one below it.
//! - Level ids are unique within a path.
//! - Only the top level can be removed directly.
//!
//! ## Modules
//!
//! - [`path`]: the stack, its transitions, and breadcrumb rendering.
//! - [`stage`]: the fixed eight-stage funnel step indicator.
//! - [`scope`]: per-kind ids used to re-query data for the current path.

pub mod path;
pub mod scope;
pub mod stage;

pub use path::{DrillLevel, DrillPath, NavigationError, MAX_DEPTH, ROOT_LABEL};
pub use scope::DrillScope;
pub use stage::FunnelStage;
