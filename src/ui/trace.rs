//! Verbose action trace

use crate::types::{SyncAction, SyncStats, TreeEntry};
use indicatif::HumanBytes;

/// Prints one line per action when verbose is on
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceReporter {
    verbose: bool,
}

impl TraceReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Announce an action before it runs
    pub fn action(&self, action: &SyncAction, entry: &TreeEntry) {
        if self.verbose {
            println!("{}", format_action(action, entry));
        }
    }
}

/// Trace line for `action` on `entry`
pub fn format_action(action: &SyncAction, entry: &TreeEntry) -> String {
    match action {
        SyncAction::CreateDir => format!("Making directory {}", entry.dest_path.display()),
        SyncAction::Skip => format!(
            "Skipping {} (already exists w/ same size and not-older mod time)",
            entry.dest_path.display()
        ),
        SyncAction::CopyNew | SyncAction::Overwrite { .. } => format!(
            "Copying {} to {}",
            entry.source_path.display(),
            entry.dest_path.display()
        ),
    }
}

/// One-line run summary
pub fn format_summary(stats: &SyncStats) -> String {
    let mut summary = format!(
        "Done: {} copied ({}), {} skipped, {} directories created",
        stats.files_transferred(),
        HumanBytes(stats.bytes_copied),
        stats.files_skipped,
        stats.dirs_created
    );
    if stats.files_repaired > 0 {
        summary.push_str(&format!(", {} permission repairs", stats.files_repaired));
    }
    summary
}
