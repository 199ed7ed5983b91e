//! Core type definitions for treesync

mod action;
mod entry;
mod error;
mod mode;
mod stats;

pub use action::SyncAction;
pub use entry::{EntryKind, FileStat, TreeEntry};
pub use error::SyncError;
pub use mode::Mode;
pub use stats::SyncStats;
