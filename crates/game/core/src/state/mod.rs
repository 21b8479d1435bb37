//! Authoritative battle state representation.
//!
//! This module owns the roster, the random stream and the battle counters.
//! The runtime shares one [`BattleState`] between its attack tasks but
//! mutates it exclusively through [`crate::engine::ArenaEngine`].
mod gladiator;
mod phase;
mod roster;
mod stats;

use core::fmt;

pub use gladiator::{Gladiator, GladiatorId};
pub use phase::SchedulerPhase;
pub use roster::Roster;
pub use stats::BattleStats;

use crate::rng::{BattleRng, RandomSource};

/// Everything one battle needs, owned by the lifecycle controller.
pub struct BattleState {
    pub roster: Roster,
    pub stats: BattleStats,
    pub phase: SchedulerPhase,
    rng: Box<dyn RandomSource>,
    /// Sequential id allocator, restarted for every battle.
    next_gladiator_id: u32,
}

impl BattleState {
    /// Creates an idle state drawing from `rng`.
    pub fn new(rng: impl RandomSource + 'static) -> Self {
        Self::with_boxed_rng(Box::new(rng))
    }

    pub fn with_boxed_rng(rng: Box<dyn RandomSource>) -> Self {
        Self {
            roster: Roster::new(),
            stats: BattleStats::default(),
            phase: SchedulerPhase::Idle,
            rng,
            next_gladiator_id: 1,
        }
    }

    /// Creates an idle state with a seeded [`BattleRng`].
    pub fn seeded(seed: u64) -> Self {
        Self::new(BattleRng::new(seed))
    }

    pub fn rng(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }

    /// Allocates the next gladiator id of the current battle.
    pub fn allocate_gladiator_id(&mut self) -> GladiatorId {
        let id = GladiatorId(self.next_gladiator_id);
        self.next_gladiator_id = self.next_gladiator_id.wrapping_add(1);
        id
    }

    /// Installs a fresh roster for battle number `battle`.
    ///
    /// Counters are cleared and the scheduler returns to idle. The id
    /// allocator continues past the highest id present so hand-built rosters
    /// never collide with later allocations.
    pub fn begin_battle(&mut self, battle: u64, roster: Roster) {
        let highest = roster.ids().map(|id| id.0).max().unwrap_or(0);
        self.next_gladiator_id = self.next_gladiator_id.max(highest.wrapping_add(1));
        self.roster = roster;
        self.stats = BattleStats::new(battle);
        self.phase = SchedulerPhase::Idle;
    }

    /// Discards the roster and clears every counter.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.stats = BattleStats::default();
        self.phase = SchedulerPhase::Idle;
        self.next_gladiator_id = 1;
    }
}

impl fmt::Debug for BattleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleState")
            .field("roster", &self.roster)
            .field("stats", &self.stats)
            .field("phase", &self.phase)
            .field("next_gladiator_id", &self.next_gladiator_id)
            .finish_non_exhaustive()
    }
}
