//! Unified error types for manifest generation.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while listing a directory or writing its manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The directory does not exist or is not a directory
    #[error("directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading the directory or writing the manifest was denied
    #[error("permission denied: {}: {source}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry name is not valid UTF-8 or contains a line break
    #[error("entry name cannot be written as one UTF-8 line in {}: {name:?}", directory.display())]
    Encoding { directory: PathBuf, name: String },

    /// Any other I/O failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ManifestError {
    /// Classifies an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ManifestError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => ManifestError::PermissionDenied {
                path: path.to_path_buf(),
                source: err,
            },
            _ => ManifestError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, ManifestError>;
