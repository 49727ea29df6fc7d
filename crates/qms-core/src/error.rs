//! # Error Types
//!
//! Parse failures of the core value types. Crates with a richer failure
//! surface (navigation, packs, configuration) define their own enums.

use thiserror::Error;

/// Errors parsing the core value types.
#[derive(Error, Debug)]
pub enum QmsError {
    /// A drill-level kind name was not recognized.
    #[error("unknown drill level kind: {0:?}")]
    InvalidKind(String),

    /// A timestamp string could not be parsed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
