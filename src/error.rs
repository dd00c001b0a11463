//! Error types.
//!
//! Synthesis itself never fails; these cover the fallible edges: loading
//! configuration and loading a corpus file.

use std::path::PathBuf;

use thiserror::Error;

/// Corpus loading error.
#[derive(Debug, Error)]
pub enum WbsError {
    /// Corpus file could not be read.
    #[error("failed to read corpus {path:?}: {source}")]
    CorpusIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Corpus file is not a JSON array of records.
    #[error("failed to parse corpus {path:?}: {source}")]
    CorpusParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
