//! Error types for the pathname library.
//!
//! Filesystem failures are passed through as [`Error::Io`]. Preconditions
//! checked by the copy operations get their own variants so callers can tell
//! "the source is a directory" apart from "the target already exists".

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathname error.
///
/// # Examples
///
/// ```
/// use pathname::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(0o755)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathname library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error reported by the operating system.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file copy was asked to copy a directory.
    #[error("source is a directory (not a file): {}", path.display())]
    SourceIsDirectory {
        /// The source path.
        path: PathBuf,
    },

    /// A file copy was asked to copy something that is neither a directory
    /// nor a regular file (a device, socket, fifo, ...).
    #[error("source is not a regular file: {}", path.display())]
    SourceNotRegularFile {
        /// The source path.
        path: PathBuf,
    },

    /// A directory copy was asked to copy something that is not a directory.
    #[error("source is not a directory: {}", path.display())]
    SourceNotDirectory {
        /// The source path.
        path: PathBuf,
    },

    /// The copy target already exists. Copies never overwrite.
    #[error("target already exists: {}", path.display())]
    TargetExists {
        /// The target path.
        path: PathBuf,
    },

    /// A directory copy target lies inside the directory being copied.
    #[error("cannot copy {} into itself at {}", source_dir.display(), target.display())]
    TargetInsideSource {
        /// The directory being copied.
        source_dir: PathBuf,
        /// The requested target path.
        target: PathBuf,
    },

    /// A match pattern is malformed.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The external recursive-copy command exited unsuccessfully.
    #[error("copy command failed ({status}). {stderr}")]
    CopyCommandFailed {
        /// Exit status of the command.
        status: ExitStatus,
        /// Diagnostic text the command wrote to stderr.
        stderr: String,
    },

    /// The operation is not available on this platform.
    #[error("{operation} is not supported on this platform")]
    Unsupported {
        /// Name of the unsupported operation.
        operation: &'static str,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if the error is an I/O "not found" error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Error;
    /// use std::io;
    ///
    /// let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if the error is a violated copy precondition rather than an
    /// operating system failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::TargetExists { path: PathBuf::from("/tmp/out") };
    /// assert!(err.is_precondition());
    /// ```
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::SourceIsDirectory { .. }
                | Self::SourceNotRegularFile { .. }
                | Self::SourceNotDirectory { .. }
                | Self::TargetExists { .. }
                | Self::TargetInsideSource { .. }
        )
    }
}
