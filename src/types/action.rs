//! SyncAction - Per-entry decision made by the policy engine

use super::Mode;

/// What to do with one walked entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Create the destination directory (and missing ancestors)
    CreateDir,

    /// Destination file is missing: copy it
    CopyNew,

    /// Destination file exists but is stale: overwrite it
    ///
    /// `repair` holds the mode to chmod the destination to before copying,
    /// when it lacked read or write bits and force was given.
    Overwrite { repair: Option<Mode> },

    /// Same size and not older than the source: leave it alone
    Skip,
}

impl SyncAction {
    pub fn action_name(&self) -> &'static str {
        match self {
            SyncAction::CreateDir => "Mkdir",
            SyncAction::CopyNew => "Copy",
            SyncAction::Overwrite { .. } => "Update",
            SyncAction::Skip => "Skip",
        }
    }
}
