//! Mercy decisions and battle termination.

use crate::config::ArenaConfig;
use crate::rng::RandomSource;
use crate::state::{GladiatorId, Roster};

/// The crowd's call on a dying gladiator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Verdict {
    /// Revived at [`ArenaConfig::REVIVE_HEALTH`]; the battle continues with them.
    Spared,
    /// Removed from the roster; the battle continues without them.
    Condemned,
}

impl Verdict {
    /// Flip the fair coin: heads spares, tails condemns.
    pub fn draw(rng: &mut dyn RandomSource) -> Self {
        if rng.coin_flip() {
            Self::Spared
        } else {
            Self::Condemned
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn revived(self) -> bool {
        matches!(self, Self::Spared)
    }
}

/// Carry out `verdict` on the roster member `id`.
///
/// Returns `false` when the member already left the roster, in which case
/// nothing changes.
pub fn apply_verdict(roster: &mut Roster, id: GladiatorId, verdict: Verdict) -> bool {
    match verdict {
        Verdict::Spared => match roster.get_mut(id) {
            Some(gladiator) => {
                gladiator.health = ArenaConfig::REVIVE_HEALTH;
                true
            }
            None => false,
        },
        Verdict::Condemned => roster.remove(id).is_some(),
    }
}

/// How a battle ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    Victor {
        id: GladiatorId,
        name: String,
        health: i32,
    },
    /// Nobody is left. No winner is announced.
    NoSurvivor,
}

impl BattleOutcome {
    pub fn winner_name(&self) -> Option<&str> {
        match self {
            Self::Victor { name, .. } => Some(name),
            Self::NoSurvivor => None,
        }
    }
}

/// Whether another round must be fought.
pub fn battle_continues(roster: &Roster) -> bool {
    roster.len() > 1
}

/// Terminal verdict for a roster that can no longer fight.
///
/// Returns `None` while more than one gladiator is left.
pub fn conclude(roster: &Roster) -> Option<BattleOutcome> {
    if battle_continues(roster) {
        return None;
    }
    Some(match roster.sole_survivor() {
        Some(winner) => BattleOutcome::Victor {
            id: winner.id,
            name: winner.name.clone(),
            health: winner.health,
        },
        None => BattleOutcome::NoSurvivor,
    })
}
