//! File comparison logic

use crate::config::{ANY_READ_BITS, ANY_WRITE_BITS};
use crate::types::{FileStat, Mode};

/// Staleness heuristic: is `dest` already in sync with `src`?
///
/// Metadata only, no content is read:
///
/// 1. **Size mismatch**: files differ → not up to date
/// 2. **Modification time**:
///    - Source strictly newer → not up to date
///    - Same or older source → up to date
///
/// Two files of equal size with an equal-or-newer destination timestamp are
/// treated as in sync even if their bytes differ.
pub fn is_up_to_date(src: &FileStat, dest: &FileStat) -> bool {
    src.size == dest.size && src.mtime <= dest.mtime
}

/// Can the destination be overwritten as-is?
///
/// Needs at least one write bit and one read bit among owner/group/other.
/// This looks at mode bits only, not at who the current user is.
pub fn is_read_writable(mode: Mode) -> bool {
    mode.intersects(ANY_WRITE_BITS) && mode.intersects(ANY_READ_BITS)
}
