//! Error types for moulberry-utils

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results returned by this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the library
#[derive(Debug, Error)]
pub enum Error {
    /// Weight was zero, negative, NaN or infinite
    #[error("invalid weight {0}: weights must be finite and greater than zero")]
    InvalidWeight(f32),

    /// Adding this weight would make the set's total weight infinite
    #[error("weight {0} would overflow the total weight of the set")]
    WeightOverflow(f32),

    /// Reading or writing a file failed
    #[error("failed to access {path}: {source}")]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file exists but is not valid TOML for [`crate::config::UtilsConfig`]
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No weighted table with this name is configured
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// A vector literal could not be parsed (expected `x,y,z`)
    #[error("invalid vector: {0}")]
    InvalidVector(String),
}
