//! Display formatting for terminal output
//!
//! Provides the verbose dumps of fetched budgets and of the messages about to
//! be sent.

pub mod notification;
pub mod snapshot;

pub use notification::format_index;
pub use snapshot::format_snapshot_summary;
