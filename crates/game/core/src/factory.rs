//! Gladiator and roster generation.

use crate::config::ArenaConfig;
use crate::error::RosterError;
use crate::names::NameSource;
use crate::rng::RandomSource;
use crate::state::{BattleState, Gladiator, GladiatorId, Roster};

/// Roll a gladiator's stats.
///
/// Draw order is health, speed, power, then name.
pub fn create_gladiator(
    id: GladiatorId,
    rng: &mut dyn RandomSource,
    names: &dyn NameSource,
) -> Gladiator {
    let health = rng.random_int(ArenaConfig::MIN_HEALTH, ArenaConfig::MAX_HEALTH);
    let speed = rng.random_stepped(
        ArenaConfig::MIN_SPEED,
        ArenaConfig::MAX_SPEED,
        ArenaConfig::SPEED_STEP,
    );
    let power = rng.random_stepped(
        ArenaConfig::MIN_POWER,
        ArenaConfig::MAX_POWER,
        ArenaConfig::POWER_STEP,
    );
    let name = names.next_name(rng);

    Gladiator::new(id, name, health, speed, power)
}

/// Roll a roster of 2 to 8 independent gladiators.
///
/// Ids come from the state's allocator and the draws from its random stream.
pub fn create_roster(
    state: &mut BattleState,
    names: &dyn NameSource,
) -> Result<Roster, RosterError> {
    let count = state
        .rng()
        .random_int(ArenaConfig::MIN_ROSTER, ArenaConfig::MAX_ROSTER);

    let mut roster = Roster::new();
    for _ in 0..count {
        let id = state.allocate_gladiator_id();
        roster.push(create_gladiator(id, state.rng(), names))?;
    }

    tracing::debug!(count, "rolled roster");
    Ok(roster)
}
