//! Error types for the projpath library.
//!
//! The path algebra itself never fails. Errors only come from the
//! collaborators around it: reading the working directory, loading root
//! configuration and resolving a path against a configured root.

use std::path::PathBuf;

use thiserror::Error;

use crate::path::RootFolder;

/// Result type alias for operations that may fail with a projpath error.
///
/// # Examples
///
/// ```
/// use projpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("src/main.cpp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the projpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A filesystem path could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// No directory is known for the requested root.
    #[error("no directory configured for root '{root}'")]
    UnresolvedRoot {
        /// The root that could not be resolved.
        root: RootFolder,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a root without a configured directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{Error, RootFolder};
    ///
    /// let err = Error::UnresolvedRoot { root: RootFolder::Unknown };
    /// assert!(err.is_unresolved_root());
    /// ```
    #[must_use]
    pub fn is_unresolved_root(&self) -> bool {
        matches!(self, Self::UnresolvedRoot { .. })
    }
}
