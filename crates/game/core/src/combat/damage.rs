//! Damage application.

use crate::state::Gladiator;

/// Rounds to the nearest integer, with halves going towards positive infinity.
///
/// `-2.5` rounds to `-2` and `2.5` to `3`.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Apply an attack of `power` to `target`.
///
/// # Formula
///
/// ```text
/// health = round(health - power)
/// ```
///
/// Health is not clamped; a non-positive result sends the caller down the
/// dying path. Returns the new health.
pub fn apply_damage(target: &mut Gladiator, power: f64) -> i32 {
    target.health = round_half_up(f64::from(target.health) - power);
    target.health
}
