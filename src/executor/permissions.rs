//! Platform glue for permission bits

use crate::types::{Mode, SyncError};
use std::fs::{self, DirBuilder, File, OpenOptions};
use std::path::Path;

/// On Unix the mode given to `open(O_CREAT)` and `mkdir` is filtered through
/// the umask, and `open` ignores it entirely for an existing file. Created
/// entries are chmod'ed afterwards so they carry exactly the resolved mode.
pub const CREATE_MASKS_MODE: bool = cfg!(unix);

/// Set the permission bits of `path`
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: Mode) -> Result<(), SyncError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode.bits()))
        .map_err(|e| SyncError::permission_change(path, e))
}

/// Set the permission bits of `path`
///
/// Only the owner write bit survives on non-Unix platforms, as the
/// read-only flag.
#[cfg(not(unix))]
pub fn set_mode(path: &Path, mode: Mode) -> Result<(), SyncError> {
    let metadata = fs::metadata(path).map_err(|e| SyncError::permission_change(path, e))?;
    let mut permissions = metadata.permissions();
    permissions.set_readonly(!mode.intersects(0o200));
    fs::set_permissions(path, permissions).map_err(|e| SyncError::permission_change(path, e))
}

/// Create or truncate `path` for reading and writing
///
/// `mode` only applies when the file is created.
pub fn create_truncate(path: &Path, mode: Mode) -> Result<File, SyncError> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode.bits());
    }
    #[cfg(not(unix))]
    let _ = mode;

    options.open(path).map_err(|e| SyncError::io(path, e))
}

/// Create `path` and any missing ancestors with `mode`
///
/// Returns `false` without touching anything when `path` is already a
/// directory.
pub fn create_dir_all(path: &Path, mode: Mode) -> Result<bool, SyncError> {
    if path.is_dir() {
        return Ok(false);
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode.bits());
    }

    builder.create(path).map_err(|e| SyncError::io(path, e))?;

    if CREATE_MASKS_MODE {
        set_mode(path, mode)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("a/b/c");
        let mode = Mode::from_bits_truncate(0o755);

        assert!(create_dir_all(&path, mode).expect("first create should succeed"));
        assert!(path.is_dir());
        assert!(!create_dir_all(&path, mode).expect("second create should succeed"));
    }

    #[test]
    fn test_create_dir_all_over_file_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("taken");
        fs::write(&path, b"file").expect("Failed to write file");

        let err = create_dir_all(&path, Mode::from_bits_truncate(0o755)).unwrap_err();
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    #[cfg(unix)]
    fn test_create_dir_all_applies_exact_mode() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("open");

        create_dir_all(&path, Mode::from_bits_truncate(0o777)).expect("create should succeed");

        let metadata = fs::metadata(&path).expect("stat dir");
        assert_eq!(Mode::from_metadata(&metadata).bits(), 0o777);
    }

    #[test]
    #[cfg(unix)]
    fn test_create_dir_all_leaves_existing_mode() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("existing");
        fs::create_dir(&path).expect("create dir");
        set_mode(&path, Mode::from_bits_truncate(0o700)).expect("chmod dir");

        create_dir_all(&path, Mode::from_bits_truncate(0o755)).expect("create should succeed");

        let metadata = fs::metadata(&path).expect("stat dir");
        assert_eq!(Mode::from_metadata(&metadata).bits(), 0o700);
    }

    #[test]
    #[cfg(unix)]
    fn test_truncate_keeps_existing_mode() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("f.txt");
        fs::write(&path, b"old content").expect("write file");
        set_mode(&path, Mode::from_bits_truncate(0o600)).expect("chmod file");

        drop(create_truncate(&path, Mode::from_bits_truncate(0o755)).expect("open should succeed"));

        let metadata = fs::metadata(&path).expect("stat file");
        assert_eq!(metadata.len(), 0);
        assert_eq!(Mode::from_metadata(&metadata).bits(), 0o600);
    }

    #[test]
    fn test_set_mode_missing_path_is_permission_change() {
        let err = set_mode(
            Path::new("/nonexistent/treesync/file"),
            Mode::from_bits_truncate(0o644),
        )
        .unwrap_err();
        assert!(matches!(err, SyncError::PermissionChange { .. }));
    }
}
