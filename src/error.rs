//! Unified error type for bcp-banner.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating or listing banners.
#[derive(Debug, Error)]
pub enum BannerError {
    /// The box renderer was given no text to frame.
    #[error("empty banner text")]
    EmptyText,

    /// The storage directory could not be created.
    #[error("Failed to create banner directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A banner file could not be written.
    #[error("Failed to write banner {}: {source}", path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory under the storage root could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadDir {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// No storage root was given and the home directory is unknown.
    #[error("Cannot locate home directory. Pass --root or set storage.root in the config file.")]
    NoHomeDir,
}
