//! Combat resolution rules.
//!
//! Pure functions over a single [`Gladiator`](crate::state::Gladiator). They
//! never touch the roster; eliminations are decided by [`crate::decision`].
//!
//! # Core Functions
//!
//! - `apply_damage`: health reduction with half-up rounding, no clamping
//! - `adjust_speed`: speed scaled by the remaining health fraction
//! - `boost_speed_if_low`: triple speed at or below 30 health
//! - `resolve_hit`: damage followed by either the dying path or the speed rules

pub mod damage;
pub mod result;
pub mod speed;

pub use damage::{apply_damage, round_half_up};
pub use result::{HitOutcome, resolve_hit};
pub use speed::{adjust_speed, attack_interval, boost_speed_if_low};
