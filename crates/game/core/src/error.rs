//! Errors raised while assembling battle state by hand.
//!
//! The battle itself has no failure modes: concurrent removals are handled as
//! silent no-ops. These errors only guard the construction APIs that accept
//! caller-supplied gladiators.

use crate::state::GladiatorId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    #[error("roster is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("gladiator {id} is already in the roster")]
    DuplicateId { id: GladiatorId },
}

impl RosterError {
    /// Static identifier for logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "roster_full",
            Self::DuplicateId { .. } => "roster_duplicate_id",
        }
    }
}
