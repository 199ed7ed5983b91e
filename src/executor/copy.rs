//! Single file copy

use super::permissions::{create_truncate, set_mode};
use crate::types::{Mode, SyncError};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Copy `src` over `dest` in place, creating or truncating it
///
/// 1. Open and stat the source, then resolve the mode: `mode_override`,
///    else the source's own permission bits
/// 2. Create/truncate the destination read-write with that mode
/// 3. Stream every byte
/// 4. If `reapply_mode`, chmod the destination to the resolved mode
///
/// Both handles are closed on every return path. A failure part way leaves
/// whatever was written in place.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(SyncError)` - `Io` for open/stat/read/write, `PermissionChange` for
///   the final chmod
///
/// # Example
/// ```no_run
/// use treesync::executor::copy_file;
/// use std::path::Path;
///
/// let bytes = copy_file(Path::new("source.txt"), Path::new("dest.txt"), true, None)?;
/// # Ok::<(), treesync::SyncError>(())
/// ```
pub fn copy_file(
    src: &Path,
    dest: &Path,
    reapply_mode: bool,
    mode_override: Option<Mode>,
) -> Result<u64, SyncError> {
    let mut src_file = File::open(src).map_err(|e| SyncError::io(src, e))?;

    let metadata = fs::metadata(src).map_err(|e| SyncError::io(src, e))?;
    let mode = mode_override.unwrap_or_else(|| Mode::from_metadata(&metadata));

    let mut dest_file = create_truncate(dest, mode)?;

    let bytes = io::copy(&mut src_file, &mut dest_file).map_err(|e| SyncError::io(dest, e))?;

    if reapply_mode {
        set_mode(dest, mode)?;
    }

    Ok(bytes)
}
