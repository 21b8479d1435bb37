//! Hit resolution.

use super::damage::apply_damage;
use super::speed::{adjust_speed, boost_speed_if_low};
use crate::state::Gladiator;

/// What a landed hit did to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitOutcome {
    /// Target survived; speed rules were applied.
    Wounded {
        health: i32,
        speed: f64,
        boosted: bool,
    },
    /// Health reached zero or below; the decision mechanic must run next and
    /// no speed rule was applied.
    Dying { health: i32 },
}

/// Resolve one landed hit of `power` on `target`.
///
/// Order matters: damage, then the low-health boost, then the proportional
/// recompute. The recompute ignores the current speed, so it replaces the
/// boosted value within the same hit.
pub fn resolve_hit(target: &mut Gladiator, power: f64) -> HitOutcome {
    let health = apply_damage(target, power);
    if target.is_dying() {
        return HitOutcome::Dying { health };
    }

    let boosted = boost_speed_if_low(target);
    adjust_speed(target);

    HitOutcome::Wounded {
        health,
        speed: target.speed,
        boosted,
    }
}
