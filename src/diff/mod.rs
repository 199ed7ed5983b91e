//! Decision logic - what to do with each walked entry

mod compare;

pub use compare::{is_read_writable, is_up_to_date};

use crate::config::{Config, OWNER_RW};
use crate::types::{FileStat, SyncAction, SyncError, TreeEntry};
use std::fs;

/// Decide the action for one entry
///
/// Rules, in order:
/// 1. Directory → `CreateDir`
/// 2. File with no destination → `CopyNew`
/// 3. File with a destination: fresh stats of both sides, then
///    - up to date → `Skip`
///    - destination lacks read or write bits → `NotWritable` error, or
///      `Overwrite` with a repair mode when `config.force` is set
///    - otherwise → `Overwrite`
pub fn decide(entry: &TreeEntry, config: &Config) -> Result<SyncAction, SyncError> {
    if entry.is_dir() {
        return Ok(SyncAction::CreateDir);
    }

    // Any stat failure on the destination takes the create path; if the
    // path is really unusable the create reports the actual error.
    let dest_metadata = match fs::metadata(&entry.dest_path) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(SyncAction::CopyNew),
    };
    let dest = FileStat::from_metadata(&entry.dest_path, &dest_metadata)?;
    let src = FileStat::read(&entry.source_path)?;

    if is_up_to_date(&src, &dest) {
        return Ok(SyncAction::Skip);
    }

    if is_read_writable(dest.mode) {
        return Ok(SyncAction::Overwrite { repair: None });
    }

    if !config.force {
        return Err(SyncError::NotWritable {
            path: entry.dest_path.clone(),
        });
    }

    Ok(SyncAction::Overwrite {
        repair: Some(dest.mode | OWNER_RW),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;
    use filetime::FileTime;
    use std::path::Path;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn file_entry(src_root: &Path, dst_root: &Path, name: &str) -> TreeEntry {
        TreeEntry::new(name.into(), EntryKind::File, src_root.join(name), dst_root)
    }

    fn set_mtime(path: &Path, mtime: SystemTime) {
        filetime::set_file_mtime(path, FileTime::from_system_time(mtime))
            .expect("Failed to set mtime");
    }

    #[test]
    fn test_directory_entry_creates_dir() {
        let entry = TreeEntry::new(
            "d".into(),
            EntryKind::Directory,
            "/src/d".into(),
            Path::new("/dst"),
        );
        let action = decide(&entry, &Config::default()).expect("decide should succeed");
        assert_eq!(action, SyncAction::CreateDir);
    }

    #[test]
    fn test_missing_destination_copies() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        std::fs::write(src.path().join("f.txt"), b"new").expect("write source");

        let entry = file_entry(src.path(), dst.path(), "f.txt");
        let action = decide(&entry, &Config::default()).expect("decide should succeed");
        assert_eq!(action, SyncAction::CopyNew);
    }

    #[test]
    fn test_up_to_date_destination_skips() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        std::fs::write(src.path().join("f.txt"), b"aaaa").expect("write source");
        std::fs::write(dst.path().join("f.txt"), b"bbbb").expect("write destination");

        let now = SystemTime::now();
        set_mtime(&src.path().join("f.txt"), now - Duration::from_secs(60));
        set_mtime(&dst.path().join("f.txt"), now);

        let entry = file_entry(src.path(), dst.path(), "f.txt");
        let action = decide(&entry, &Config::default()).expect("decide should succeed");
        assert_eq!(action, SyncAction::Skip);
    }

    #[test]
    fn test_stale_destination_overwrites() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        std::fs::write(src.path().join("f.txt"), b"longer content").expect("write source");
        std::fs::write(dst.path().join("f.txt"), b"short").expect("write destination");

        let entry = file_entry(src.path(), dst.path(), "f.txt");
        let action = decide(&entry, &Config::default()).expect("decide should succeed");
        assert_eq!(action, SyncAction::Overwrite { repair: None });
    }

    #[test]
    #[cfg(unix)]
    fn test_unwritable_destination_without_force_fails() {
        use std::os::unix::fs::PermissionsExt;

        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        std::fs::write(src.path().join("f.txt"), b"longer content").expect("write source");
        let dest_file = dst.path().join("f.txt");
        std::fs::write(&dest_file, b"short").expect("write destination");
        std::fs::set_permissions(&dest_file, std::fs::Permissions::from_mode(0o444))
            .expect("chmod destination");

        let entry = file_entry(src.path(), dst.path(), "f.txt");
        let err = decide(&entry, &Config::default()).unwrap_err();
        assert!(err.is_not_writable());
        assert_eq!(err.path(), Some(dest_file.as_path()));
    }

    #[test]
    #[cfg(unix)]
    fn test_unwritable_destination_with_force_repairs() {
        use std::os::unix::fs::PermissionsExt;

        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        std::fs::write(src.path().join("f.txt"), b"longer content").expect("write source");
        let dest_file = dst.path().join("f.txt");
        std::fs::write(&dest_file, b"short").expect("write destination");
        std::fs::set_permissions(&dest_file, std::fs::Permissions::from_mode(0o044))
            .expect("chmod destination");

        let config = Config {
            force: true,
            ..Config::default()
        };
        let entry = file_entry(src.path(), dst.path(), "f.txt");
        let action = decide(&entry, &config).expect("decide should succeed");
        assert_eq!(
            action,
            SyncAction::Overwrite {
                repair: Some(crate::types::Mode::from_bits_truncate(0o644))
            }
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_up_to_date_unwritable_destination_still_skips() {
        use std::os::unix::fs::PermissionsExt;

        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        std::fs::write(src.path().join("f.txt"), b"same").expect("write source");
        let dest_file = dst.path().join("f.txt");
        std::fs::write(&dest_file, b"same").expect("write destination");
        set_mtime(&src.path().join("f.txt"), SystemTime::now() - Duration::from_secs(60));
        std::fs::set_permissions(&dest_file, std::fs::Permissions::from_mode(0o444))
            .expect("chmod destination");

        let entry = file_entry(src.path(), dst.path(), "f.txt");
        let action = decide(&entry, &Config::default()).expect("decide should succeed");
        assert_eq!(action, SyncAction::Skip);
    }
}
