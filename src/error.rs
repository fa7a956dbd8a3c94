//! Error types for package generation.
//!
//! This module defines all error types with enough context to point at the
//! file or descriptor that failed.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for packager operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors without path context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO errors annotated with the operation and path that failed
    #[error("IO error while {operation} ({}): {source}", .path.display())]
    Fs {
        /// What the packager was doing
        operation: String,
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Archive creation errors
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Template registration or rendering errors
    #[error("template error: {0}")]
    Template(String),

    /// Catalog loading and validation errors
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Generic errors
    #[error("{0}")]
    Generic(String),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

/// Catalog-specific errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("catalog file {} could not be read: {source}", .path.display())]
    Unreadable {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Catalog text is not valid JSON
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Catalog holds no application descriptors
    #[error("catalog holds no application descriptors")]
    Empty,

    /// Two descriptors share the same id
    #[error("duplicate application id `{id}`")]
    DuplicateId {
        /// The offending id
        id: String,
    },

    /// A descriptor violates a catalog invariant
    #[error("invalid descriptor `{id}`: {reason}")]
    InvalidDescriptor {
        /// Descriptor id (or name when the id itself is invalid)
        id: String,
        /// Which invariant was violated
        reason: String,
    },
}

/// Return early with a [`PackagerError::Generic`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::error::PackagerError::Generic(format!($($arg)*)))
    };
}

/// Extension trait for attaching a message to `Option` values.
pub trait Context<T> {
    /// Converts `None` into a [`PackagerError::Generic`] with the given message.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| PackagerError::Generic(msg.to_string()))
    }
}

/// Extension trait for annotating IO results with operation and path.
pub trait ErrorExt<T> {
    /// Wraps an IO error into [`PackagerError::Fs`].
    fn fs_context(self, operation: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn fs_context(self, operation: &str, path: &Path) -> Result<T> {
        self.map_err(|source| PackagerError::Fs {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}
