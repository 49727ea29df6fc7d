//! # qms-autosave: Debounced Autosave
//!
//! Audit questionnaires and drafts are saved in the background while the
//! auditor types. [`AutoSave`] holds the most recent draft and calls an
//! async save function once the draft has been quiet for a configurable
//! delay (30 s by default).
//!
//! ## Save paths
//!
//! - **Scheduled**: trailing-edge debounce. Every [`AutoSave::observe`]
//!   restarts the timer. Failures are logged and dropped since nobody is
//!   waiting on them.
//! - **Manual**: [`AutoSave::save_now`] saves immediately and returns the
//!   save function's error unchanged.
//!
//! The two paths are not serialized against each other. A manual save can
//! overlap a scheduled one that just fired; the save function must tolerate
//! that.

pub mod config;
pub mod scheduler;

pub use config::{AutoSaveConfig, DEFAULT_DELAY};
pub use scheduler::{AutoSave, AutoSaveError, AutoSaveStatus};
