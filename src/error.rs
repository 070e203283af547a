//! Unified error types for chatsum.
//!
//! This module provides a single [`ChatsumError`] enum that covers all error
//! cases in the library.
//!
//! # Recoverable vs. fatal
//!
//! - [`SourceUnavailable`](ChatsumError::SourceUnavailable) and
//!   [`DirectoryUnavailable`](ChatsumError::DirectoryUnavailable) are
//!   recoverable: the non-`try_` entry points report them and carry on with
//!   empty results.
//! - [`DependencyInit`](ChatsumError::DependencyInit) is fatal: without a
//!   stopword list there is nothing meaningful to rank.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for chatsum operations.
///
/// # Example
///
/// ```rust
/// use chatsum::error::Result;
/// use chatsum::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsumError>;

/// The error type for all chatsum operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsumError {
    /// A transcript file is missing or could not be read.
    ///
    /// Also raised for files that are not valid UTF-8.
    #[error("Cannot read transcript {}: {source}", path.display())]
    SourceUnavailable {
        /// The transcript path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A batch directory is missing or could not be listed.
    #[error("Cannot list directory {}: {source}", path.display())]
    DirectoryUnavailable {
        /// The directory path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An external resource (the stopword list) could not be prepared.
    #[error("Failed to initialize {dependency}: {message}")]
    DependencyInit {
        /// What failed to initialize (e.g., "stopword list")
        dependency: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The requested output format is not available.
    ///
    /// This occurs when a format's cargo feature is disabled.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format (e.g., "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An I/O error occurred outside of transcript or directory access.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV rendering error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON rendering error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when a rendered buffer is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatsumError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatsumError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsumError {
    /// Creates a source-unavailable error for a transcript path.
    pub fn source_unavailable(path: impl AsRef<Path>, source: io::Error) -> Self {
        ChatsumError::SourceUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a directory-unavailable error.
    pub fn directory_unavailable(path: impl AsRef<Path>, source: io::Error) -> Self {
        ChatsumError::DirectoryUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a dependency initialization error.
    pub fn dependency_init(dependency: &'static str, message: impl Into<String>) -> Self {
        ChatsumError::DependencyInit {
            dependency,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsumError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is a transcript read error.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, ChatsumError::SourceUnavailable { .. })
    }

    /// Returns `true` if this is a directory listing error.
    pub fn is_directory_unavailable(&self) -> bool {
        matches!(self, ChatsumError::DirectoryUnavailable { .. })
    }

    /// Returns `true` if this is a dependency initialization error.
    pub fn is_dependency_init(&self) -> bool {
        matches!(self, ChatsumError::DependencyInit { .. })
    }

    /// Returns `true` if the process should keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        self.is_source_unavailable() || self.is_directory_unavailable()
    }
}
