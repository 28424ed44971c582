//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Error type for seqdist operations
#[derive(Debug, Error)]
pub enum SeqdistError {
    /// File system related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A tag resource could not be read at all
    #[error("failed to read tag file {path}: {source}")]
    TagFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the tag resource did not parse into a usable pair
    #[error("malformed tag file {path}: line {line}: {message}")]
    TagFile {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Tag pair construction rejected its inputs
    #[error("invalid tag pair: {0}")]
    InvalidTagPair(String),

    /// Runtime settings errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Corrupt or truncated intermediate stream
    #[error("wire format error: {0}")]
    Wire(String),
}

/// Result type alias
pub type SeqdistResult<T> = Result<T, SeqdistError>;
