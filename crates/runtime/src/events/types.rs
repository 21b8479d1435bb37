//! Event payloads published on the bus.

use serde::{Deserialize, Serialize};

use game_core::{AttackReport, BattleOutcome, Gladiator};

/// Events produced while strikes resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombatEvent {
    /// A strike landed. Healths are taken before damage.
    Attack(AttackReport),
    NearDeath {
        name: String,
    },
    /// Mercy decision: `revived` gladiators continue at 50 health, the
    /// others were removed.
    Continuation {
        name: String,
        revived: bool,
    },
}

/// Battle lifecycle and roster bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LifecycleEvent {
    BattleStarted {
        battle: u64,
        gladiators: Vec<Gladiator>,
    },
    CountChanged {
        count: usize,
    },
    RoundComplete {
        round: u32,
        survivors: usize,
    },
    Victory {
        name: String,
        health: i32,
    },
    BattleConcluded {
        battle: u64,
        outcome: BattleOutcome,
    },
}
