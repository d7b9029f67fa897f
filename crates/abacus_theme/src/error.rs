//! # Theme Error Types
//!
//! Only building a theme from a configuration file can fail. Token
//! lookups never do.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading theme configuration.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The configuration file could not be read.
    #[error("failed to read theme config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has unknown keys.
    #[error("invalid theme config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for theme configuration.
pub type ThemeResult<T> = Result<T, ThemeError>;
