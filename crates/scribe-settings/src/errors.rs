//! Settings error types.

use std::path::PathBuf;

/// Result alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors raised while locating, reading, or parsing settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file is not valid JSON.
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The merged settings JSON does not match the schema.
    #[error("invalid settings values: {0}")]
    Invalid(#[source] serde_json::Error),

    /// No home directory to anchor `~/.scribe/settings.json`.
    #[error("cannot locate home directory for settings path")]
    NoHomeDir,
}
