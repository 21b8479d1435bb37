//! Worker tasks that back the runtime orchestration.
//!
//! The round scheduler fans attack tasks out per round and joins them before
//! the next round may begin.

mod scheduler;

pub use scheduler::{RoundReport, RoundScheduler, SharedBattle};
