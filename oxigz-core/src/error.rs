//! Error types for oxigz operations.
//!
//! Errors split into two severities: [`OxigzError::Config`] is fatal and
//! aborts a run before any path is touched; every other variant is scoped to
//! a single path (or the stdin stream) and must not stop the rest of a batch.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for oxigz operations.
#[derive(Debug, Error)]
pub enum OxigzError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Conflicting or invalid configuration, detected before processing.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the conflict.
        message: String,
    },

    /// A path could not be opened, read, written or removed.
    #[error("{}: {}", .path.display(), .source)]
    Path {
        /// The affected path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Requested direction does not match the detected content format.
    #[error("{}: {}", .path.display(), .message)]
    FormatMismatch {
        /// The affected path.
        path: PathBuf,
        /// Why the path was skipped.
        message: String,
    },

    /// The compressor reported a write or finalize failure.
    #[error("codec error: {message}")]
    Codec {
        /// Description of the codec failure.
        message: String,
    },

    /// Input is not a valid gzip container (bad header, corrupt or truncated).
    #[error("invalid gzip data: {message}")]
    Format {
        /// Description of the format failure.
        message: String,
    },

    /// Too few bytes available to classify the content.
    #[error("cannot classify content: {available} byte(s) available, need 2")]
    TooShort {
        /// Number of bytes that were available.
        available: usize,
    },
}

/// Result type alias for oxigz operations.
pub type Result<T> = std::result::Result<T, OxigzError>;

impl OxigzError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a per-path I/O error.
    pub fn path(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Path {
            path: path.into(),
            source,
        }
    }

    /// Create a format mismatch error for a path.
    pub fn mismatch(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::FormatMismatch {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a codec error.
    pub fn codec(message: impl Into<String>) -> Self {
        Self::Codec {
            message: message.into(),
        }
    }

    /// Create an invalid gzip data error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a too-short-to-classify error.
    pub fn too_short(available: usize) -> Self {
        Self::TooShort { available }
    }

    /// Whether this error must abort the whole run rather than one path.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}
