//! TreeEntry and FileStat - what the walker emits and what decisions read

use super::{Mode, SyncError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Kind of a walked entry
///
/// Anything that is not a directory (regular files, symlinks, special files)
/// is treated as a file and copied through its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One step of a source tree walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the source root (empty for the root itself)
    pub relative_path: PathBuf,

    pub kind: EntryKind,

    /// Absolute (or caller-relative) path under the source root
    pub source_path: PathBuf,

    /// Matching path under the destination root
    pub dest_path: PathBuf,
}

impl TreeEntry {
    /// Build an entry, rejoining `relative_path` under `dest_root`
    pub fn new(
        relative_path: PathBuf,
        kind: EntryKind,
        source_path: PathBuf,
        dest_root: &Path,
    ) -> Self {
        let dest_path = if relative_path.as_os_str().is_empty() {
            dest_root.to_path_buf()
        } else {
            dest_root.join(&relative_path)
        };

        Self {
            relative_path,
            kind,
            source_path,
            dest_path,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Size, modification time and permission bits of a file, read at decision time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// File size in bytes
    pub size: u64,

    /// Last modification time
    pub mtime: SystemTime,

    pub mode: Mode,
}

impl FileStat {
    pub fn new(size: u64, mtime: SystemTime, mode: Mode) -> Self {
        Self { size, mtime, mode }
    }

    /// Stat `path`, following symlinks
    pub fn read(path: &Path) -> Result<Self, SyncError> {
        let metadata = fs::metadata(path).map_err(|e| SyncError::io(path, e))?;
        Self::from_metadata(path, &metadata)
    }

    pub fn from_metadata(path: &Path, metadata: &fs::Metadata) -> Result<Self, SyncError> {
        let mtime = metadata.modified().map_err(|e| SyncError::io(path, e))?;
        Ok(Self::new(metadata.len(), mtime, Mode::from_metadata(metadata)))
    }
}
