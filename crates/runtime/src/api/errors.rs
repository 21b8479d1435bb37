//! Unified error types surfaced by the runtime API.
//!
//! The battle itself never fails; these errors cover configuration, roster
//! construction and attack tasks that panicked instead of settling.
use thiserror::Error;

use game_core::RosterError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid runtime config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("attack task failed to settle")]
    AttackTask(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}
