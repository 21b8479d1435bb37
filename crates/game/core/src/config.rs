/// Fixed battle rules.
///
/// Every stat range and threshold is a compile-time constant; battles are not
/// tunable. Runtime concerns such as tick duration live in the runtime crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaConfig;

impl ArenaConfig {
    // ===== roster =====
    pub const MIN_ROSTER: i32 = 2;
    pub const MAX_ROSTER: i32 = 8;
    /// Capacity of the bounded roster storage.
    pub const ROSTER_CAPACITY: usize = Self::MAX_ROSTER as usize;

    // ===== gladiator stats =====
    pub const MIN_HEALTH: i32 = 80;
    pub const MAX_HEALTH: i32 = 100;
    pub const MIN_POWER: f64 = 2.0;
    pub const MAX_POWER: f64 = 5.0;
    pub const POWER_STEP: f64 = 0.1;
    pub const MIN_SPEED: f64 = 1.0;
    pub const MAX_SPEED: f64 = 5.0;
    pub const SPEED_STEP: f64 = 0.001;

    // ===== combat rules =====
    /// Health at or below which a surviving hit triples speed.
    pub const LOW_HEALTH_THRESHOLD: i32 = 30;
    pub const LOW_HEALTH_SPEED_MULTIPLIER: f64 = 3.0;
    /// Health granted by a merciful verdict.
    pub const REVIVE_HEALTH: i32 = 50;
    /// `attack_interval = INTERVAL_BASE - speed`, in ticks.
    pub const INTERVAL_BASE: f64 = 6.0;
}
