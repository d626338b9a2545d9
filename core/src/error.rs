//! Structured errors for the configuration edge.
//!
//! The classifier and session are total functions over their inputs and
//! have no error paths; only loading a keyword file can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read keyword file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse keyword file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{key} contains a blank marker; a blank marker would match every input")]
    BlankMarker { key: &'static str },
}
