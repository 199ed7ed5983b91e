//! Error types for treesync

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for sync operations
///
/// Every variant is fatal to a run: the first error stops the walk and is
/// handed back to the caller as-is.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The source tree could not be read (missing root, permission denied,
    /// entry vanished mid-walk)
    #[error("{0}")]
    Walk(#[from] ignore::Error),

    /// Destination needs updating but lacks read or write permission bits
    #[error(
        "{} needs to be updated but is not writable. \
         Specifying --force will override, if permitted",
        path.display()
    )]
    NotWritable { path: PathBuf },

    /// A chmod on the destination failed
    #[error("Failed to change permissions of {}: {source}", path.display())]
    PermissionChange {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Open/stat/read/write/mkdir failure on a specific path
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SyncError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        SyncError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a failed chmod with the path it targeted
    pub fn permission_change(path: impl AsRef<Path>, source: io::Error) -> Self {
        SyncError::PermissionChange {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Path the error refers to, when one is known
    pub fn path(&self) -> Option<&Path> {
        match self {
            SyncError::NotWritable { path }
            | SyncError::PermissionChange { path, .. }
            | SyncError::Io { path, .. } => Some(path),
            SyncError::Walk(_) | SyncError::Config(_) => None,
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, SyncError::Config(_))
    }

    /// Check if the destination was refused for lack of write/read bits
    pub fn is_not_writable(&self) -> bool {
        matches!(self, SyncError::NotWritable { .. })
    }

    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        match self {
            SyncError::NotWritable { .. } | SyncError::PermissionChange { .. } => true,
            SyncError::Io { source, .. } => source.kind() == io::ErrorKind::PermissionDenied,
            SyncError::Walk(err) => err
                .io_error()
                .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied),
            SyncError::Config(_) => false,
        }
    }
}
