//! SyncStats - Counters for a completed run

use super::SyncAction;

/// What a sync run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Directories that did not exist and were created
    pub dirs_created: usize,
    /// Files copied because the destination was missing
    pub files_copied: usize,
    /// Existing destination files overwritten
    pub files_updated: usize,
    /// Destination files chmod'ed so they could be overwritten
    pub files_repaired: usize,
    /// Files left alone by the staleness check
    pub files_skipped: usize,
    /// Aggregate copied bytes (CopyNew + Overwrite)
    pub bytes_copied: u64,
}

impl SyncStats {
    /// Account for one executed action
    pub fn record(&mut self, action: &SyncAction, bytes: u64) {
        match action {
            SyncAction::CreateDir => {}
            SyncAction::CopyNew => self.files_copied += 1,
            SyncAction::Overwrite { repair } => {
                self.files_updated += 1;
                if repair.is_some() {
                    self.files_repaired += 1;
                }
            }
            SyncAction::Skip => self.files_skipped += 1,
        }
        self.bytes_copied += bytes;
    }

    /// Files whose content was written in this run
    pub fn files_transferred(&self) -> usize {
        self.files_copied + self.files_updated
    }
}
