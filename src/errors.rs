//! Defines application-specific error types.
//!
//! Every failure to read a file collapses into [`Error::FileInaccessible`];
//! the cause (not found, permission denied, not a regular file) is kept as the
//! source for logging but never changes the reported message or exit status.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while counting files or writing reports.
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened, read, or sized.
    #[error("failed to open {}", path.display())]
    FileInaccessible {
        /// The path exactly as it was given.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Writing a report line to the output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// A `Result` alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::FileInaccessible` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<Path>`.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::FileInaccessible {
        path: path.as_ref().to_path_buf(),
        source,
    }
}
