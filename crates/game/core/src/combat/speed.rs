//! Speed feedback rules.

use crate::config::ArenaConfig;
use crate::state::Gladiator;

/// Recompute speed from the remaining health fraction.
///
/// ```text
/// speed = initial_speed * (health / initial_health)
/// ```
///
/// The result does not depend on the current speed.
pub fn adjust_speed(target: &mut Gladiator) {
    target.speed = target.initial_speed * target.health_ratio();
}

/// Triple the current speed when health is at or below the low-health
/// threshold. Returns whether the boost applied.
pub fn boost_speed_if_low(target: &mut Gladiator) -> bool {
    if target.health <= ArenaConfig::LOW_HEALTH_THRESHOLD {
        target.speed *= ArenaConfig::LOW_HEALTH_SPEED_MULTIPLIER;
        true
    } else {
        false
    }
}

/// Delay before an attack lands, in ticks. Negative once speed exceeds 6;
/// schedulers treat that as zero.
pub fn attack_interval(attacker: &Gladiator) -> f64 {
    ArenaConfig::INTERVAL_BASE - attacker.speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GladiatorId;
    use proptest::prelude::*;

    fn gladiator(health: i32, speed: f64) -> Gladiator {
        Gladiator::new(GladiatorId(1), "Celadus", health, speed, 3.0)
    }

    #[test]
    fn adjust_speed_scales_with_health() {
        let mut g = gladiator(80, 4.0);
        g.health = 40;
        adjust_speed(&mut g);
        assert!((g.speed - 2.0).abs() < 1e-12);
    }

    #[test]
    fn boost_only_at_or_below_threshold() {
        let mut g = gladiator(90, 2.0);
        g.health = 31;
        assert!(!boost_speed_if_low(&mut g));
        assert_eq!(g.speed, 2.0);

        g.health = 30;
        assert!(boost_speed_if_low(&mut g));
        assert!((g.speed - 6.0).abs() < 1e-12);
    }

    #[test]
    fn attack_interval_can_go_negative() {
        let mut g = gladiator(90, 5.0);
        assert!((attack_interval(&g) - 1.0).abs() < 1e-12);
        g.speed = 7.5;
        assert!(attack_interval(&g) < 0.0);
    }

    proptest! {
        #[test]
        fn adjust_speed_never_exceeds_initial(
            initial_health in 80i32..=100,
            lost in 0i32..=100,
            speed_millis in 1000u32..=5000,
        ) {
            let initial_speed = f64::from(speed_millis) / 1000.0;
            let mut g = gladiator(initial_health, initial_speed);
            g.health = (initial_health - lost).max(1);
            g.speed = initial_speed * 3.0;

            adjust_speed(&mut g);
            prop_assert!(g.speed <= g.initial_speed);
            prop_assert!(g.speed > 0.0);
        }

        #[test]
        fn adjust_speed_is_monotonic_in_health(
            initial_health in 80i32..=100,
            a in 1i32..=100,
            b in 1i32..=100,
        ) {
            let (low, high) = (a.min(b).min(initial_health), a.max(b).min(initial_health));
            let mut g = gladiator(initial_health, 3.0);

            g.health = low;
            adjust_speed(&mut g);
            let slow = g.speed;

            g.health = high;
            adjust_speed(&mut g);
            prop_assert!(slow <= g.speed);
        }
    }
}
