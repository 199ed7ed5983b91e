//! Executor module for file operations

pub mod copy;
pub mod permissions;

use crate::config::Config;
use crate::types::{SyncAction, SyncError, TreeEntry};

pub use copy::copy_file;
pub use permissions::{create_dir_all, set_mode, CREATE_MASKS_MODE};

/// Result of executing one action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// A directory that did not exist was created
    pub dir_created: bool,
    /// Bytes written to the destination
    pub bytes_copied: u64,
}

/// Perform the filesystem mutation for one decided action
pub fn execute_action(
    action: &SyncAction,
    entry: &TreeEntry,
    config: &Config,
) -> Result<ActionOutcome, SyncError> {
    match action {
        SyncAction::CreateDir => {
            let dir_created = create_dir_all(&entry.dest_path, config.directory_mode())?;
            Ok(ActionOutcome {
                dir_created,
                ..Default::default()
            })
        }
        SyncAction::Skip => Ok(ActionOutcome::default()),
        SyncAction::CopyNew => {
            let bytes_copied = copy_file(
                &entry.source_path,
                &entry.dest_path,
                CREATE_MASKS_MODE,
                config.mode_override,
            )?;
            Ok(ActionOutcome {
                bytes_copied,
                ..Default::default()
            })
        }
        SyncAction::Overwrite { repair } => {
            if let Some(mode) = repair {
                tracing::warn!(
                    path = %entry.dest_path.display(),
                    mode = %mode,
                    "adding owner read/write to unwritable destination"
                );
                set_mode(&entry.dest_path, *mode)?;
            }
            // The existing file keeps its old mode through the truncating open.
            let bytes_copied =
                copy_file(&entry.source_path, &entry.dest_path, true, config.mode_override)?;
            Ok(ActionOutcome {
                bytes_copied,
                ..Default::default()
            })
        }
    }
}
