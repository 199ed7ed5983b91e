//! # treesync - Local one-way directory synchronization
//!
//! Recursively copies a source tree into a destination tree, skipping files
//! that already look up to date (same size, destination not older), and
//! optionally forcing a permission mode on everything it creates. Nothing in
//! the destination is ever deleted.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod executor;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use commands::sync::run as sync;
pub use config::Config;
pub use types::{EntryKind, FileStat, Mode, SyncAction, SyncError, SyncStats, TreeEntry};
