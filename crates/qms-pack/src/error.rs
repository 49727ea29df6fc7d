//! Failures loading a document mapping table.

use std::path::PathBuf;

use thiserror::Error;

/// Why a document table could not be used.
#[derive(Debug, Error)]
pub enum PackError {
    /// A table file on disk is not valid YAML, or does not have the
    /// `mappings` shape.
    #[error("document table {path} is malformed: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The table path does not exist.
    #[error("document table not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A row lists no documents, or a blank document name.
    #[error("invalid document table: {0}")]
    Validation(String),

    /// Reading the table file failed.
    #[error("cannot read document table: {0}")]
    Io(#[from] std::io::Error),

    /// In-memory YAML text did not parse.
    #[error("malformed document table YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result of loading a document table.
pub type PackResult<T> = Result<T, PackError>;
