//! Played-card history.

pub mod ledger;

pub use ledger::{Timeline, TimelineEntry};
