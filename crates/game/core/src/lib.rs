//! Deterministic battle rules for the gladiator arena.
//!
//! `game-core` defines the canonical rules (stat generation, combat feedback,
//! mercy decisions, termination) and exposes pure, synchronous APIs. The
//! runtime crate adds timing and concurrency on top. All state mutation
//! during a battle flows through [`engine::ArenaEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod combat;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod factory;
pub mod names;
pub mod rng;
pub mod state;

pub use combat::{HitOutcome, adjust_speed, apply_damage, boost_speed_if_low, resolve_hit};
pub use config::ArenaConfig;
pub use decision::{BattleOutcome, Verdict, apply_verdict, conclude};
pub use engine::{
    ArenaEngine, AttackPlan, AttackReport, RoundPlan, StrikeResolution, StrikeResult,
};
pub use error::RosterError;
pub use factory::{create_gladiator, create_roster};
pub use names::{FixedNames, LatinNames, NameSource};
pub use rng::{BattleRng, RandomSource};
pub use state::{BattleState, BattleStats, Gladiator, GladiatorId, Roster, SchedulerPhase};
