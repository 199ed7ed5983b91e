//! Main sync command

use crate::diff::decide;
use crate::executor::execute_action;
use crate::scanner::walk_tree;
use crate::types::{SyncError, SyncStats};
use crate::ui::TraceReporter;
use crate::Config;

/// Run the sync operation
///
/// Walks `config.source` in pre-order; each entry is decided and executed
/// before the walk moves on. The first error ends the run and is returned
/// as-is. Nothing done before it is rolled back, so the destination may be
/// partially updated.
pub fn run(config: &Config) -> Result<SyncStats, SyncError> {
    let reporter = TraceReporter::new(config.verbose);
    let mut stats = SyncStats::default();

    tracing::debug!(
        source = %config.source.display(),
        destination = %config.destination.display(),
        dir_mode = %config.directory_mode(),
        force = config.force,
        "starting sync"
    );

    walk_tree(&config.source, &config.destination, |entry| {
        let action = decide(entry, config)?;
        tracing::debug!(
            action = action.action_name(),
            path = %entry.relative_path.display(),
            "decided"
        );

        reporter.action(&action, entry);
        let outcome = execute_action(&action, entry, config)?;

        if outcome.dir_created {
            stats.dirs_created += 1;
        }
        stats.record(&action, outcome.bytes_copied);
        Ok(())
    })?;

    tracing::debug!(
        copied = stats.files_transferred(),
        skipped = stats.files_skipped,
        bytes = stats.bytes_copied,
        "sync complete"
    );

    Ok(stats)
}
