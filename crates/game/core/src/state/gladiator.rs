use core::fmt;

/// Stable identity of a gladiator within one battle.
///
/// Attack tasks capture ids rather than roster positions, so a removal
/// elsewhere in the round can never redirect a pending strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GladiatorId(pub u32);

impl fmt::Display for GladiatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single combat participant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gladiator {
    pub id: GladiatorId,
    pub name: String,
    /// Current vitality. May dip to zero or below only while a hit resolves.
    pub health: i32,
    pub initial_health: i32,
    /// Current tempo; the attack interval is `6 - speed` ticks.
    pub speed: f64,
    pub initial_speed: f64,
    /// Damage dealt per landed attack.
    pub power: f64,
}

impl Gladiator {
    /// Creates a gladiator at full health with its snapshots taken from the
    /// given stats.
    pub fn new(id: GladiatorId, name: impl Into<String>, health: i32, speed: f64, power: f64) -> Self {
        Self {
            id,
            name: name.into(),
            health,
            initial_health: health,
            speed,
            initial_speed: speed,
            power,
        }
    }

    pub fn is_dying(&self) -> bool {
        self.health <= 0
    }

    /// Fraction of the starting health that remains.
    pub fn health_ratio(&self) -> f64 {
        f64::from(self.health) / f64::from(self.initial_health)
    }
}
