//! User-facing output

pub mod logging;
mod trace;

pub use trace::{format_action, format_summary, TraceReporter};
