//! Sequential pre-order directory walker

use crate::types::{EntryKind, SyncError, TreeEntry};
use std::path::Path;

/// Walk `source_root` depth-first and call `visit` for every entry
///
/// Directories are visited before their contents and siblings in file-name
/// order, so two walks of an unchanged tree visit entries identically. The
/// root itself is visited first with an empty relative path.
///
/// Nothing is filtered: hidden files, `.gitignore` rules and `.ignore` files
/// have no effect. Symlinks are not followed; they are reported as files.
///
/// # Errors
/// * Any read failure of the source tree returns `SyncError::Walk` at once
/// * An error returned by `visit` stops the walk and is returned unchanged
pub fn walk_tree<F>(source_root: &Path, dest_root: &Path, mut visit: F) -> Result<(), SyncError>
where
    F: FnMut(&TreeEntry) -> Result<(), SyncError>,
{
    let walker = ignore::WalkBuilder::new(source_root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for result in walker {
        let entry = result?;

        let kind = match entry.file_type() {
            Some(ft) if ft.is_dir() => EntryKind::Directory,
            _ => EntryKind::File,
        };

        let relative_path = entry
            .path()
            .strip_prefix(source_root)
            .map_err(|_| {
                ignore::Error::Io(std::io::Error::other(format!(
                    "{} is not inside source root {}",
                    entry.path().display(),
                    source_root.display()
                )))
            })?
            .to_path_buf();

        let tree_entry = TreeEntry::new(relative_path, kind, entry.path().to_path_buf(), dest_root);
        visit(&tree_entry)?;
    }

    Ok(())
}
