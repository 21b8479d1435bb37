//! Round planning and strike resolution.
//!
//! The [`ArenaEngine`] is the authoritative reducer for [`BattleState`]. The
//! runtime decides *when* things happen (timers, task fan-out); the engine
//! decides *what* happens. Every call runs to completion without suspending,
//! which makes each strike atomic relative to the other tasks of its round.

use arrayvec::ArrayVec;

use crate::combat::{HitOutcome, attack_interval, resolve_hit};
use crate::config::ArenaConfig;
use crate::decision::{self, BattleOutcome, Verdict};
use crate::state::{BattleState, GladiatorId, SchedulerPhase};

/// One attack scheduled at the start of a round.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackPlan {
    pub round: u32,
    pub attacker: GladiatorId,
    pub target: GladiatorId,
    /// `6 - speed` at planning time, in ticks. May be negative.
    pub interval: f64,
}

impl AttackPlan {
    /// Delay before the strike lands; negative intervals fire immediately.
    pub fn delay_ticks(&self) -> f64 {
        self.interval.max(0.0)
    }
}

/// Plans for every member of the roster, in roster order.
pub type RoundPlan = ArrayVec<AttackPlan, { ArenaConfig::ROSTER_CAPACITY }>;

/// Snapshot taken when a strike lands, before damage is applied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attacker_name: String,
    pub attacker_health: i32,
    pub target_name: String,
    pub target_health: i32,
    pub power: f64,
}

/// What happened to the target after a landed strike.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrikeResolution {
    Wounded {
        health: i32,
        speed: f64,
        boosted: bool,
    },
    /// The target reached zero health and the coin was flipped.
    Decided {
        health: i32,
        verdict: Verdict,
        survivors: usize,
    },
}

/// Result of resuming an attack task.
#[derive(Clone, Debug, PartialEq)]
pub enum StrikeResult {
    /// Attacker or target left the roster before the strike landed.
    Stale,
    Landed {
        report: AttackReport,
        resolution: StrikeResolution,
    },
}

/// Reducer over a borrowed [`BattleState`].
pub struct ArenaEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> ArenaEngine<'a> {
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    /// Opens the next round and plans one attack per living gladiator.
    ///
    /// Each attacker picks a uniformly random position, redrawing while it
    /// picks itself. Returns `None` once fewer than two gladiators remain.
    ///
    /// The redraw is unbounded: a [`RandomSource`](crate::rng::RandomSource)
    /// that only ever yields the attacker's own position never returns.
    pub fn begin_round(&mut self) -> Option<RoundPlan> {
        if !decision::battle_continues(&self.state.roster) {
            return None;
        }

        let round = self.state.stats.rounds + 1;
        self.advance(SchedulerPhase::RoundInProgress { round });

        let last = self.state.roster.len() as i32 - 1;
        let mut plans = RoundPlan::new();
        for position in 0..self.state.roster.len() {
            let opponent = loop {
                let pick = self.state.rng().random_int(0, last) as usize;
                if pick != position {
                    break pick;
                }
            };

            let roster = &self.state.roster;
            let (Some(attacker), Some(target)) = (roster.at(position), roster.at(opponent)) else {
                continue;
            };
            plans.push(AttackPlan {
                round,
                attacker: attacker.id,
                target: target.id,
                interval: attack_interval(attacker),
            });
        }

        tracing::debug!(round, attacks = plans.len(), "round planned");
        Some(plans)
    }

    /// Lands a planned strike if both sides are still in the roster.
    pub fn resolve_attack(&mut self, plan: &AttackPlan) -> StrikeResult {
        let Some(attacker) = self.state.roster.get(plan.attacker) else {
            return self.cancel(plan);
        };
        let (attacker_name, attacker_health, power) =
            (attacker.name.clone(), attacker.health, attacker.power);

        let Some(target) = self.state.roster.get_mut(plan.target) else {
            return self.cancel(plan);
        };
        let report = AttackReport {
            attacker_name,
            attacker_health,
            target_name: target.name.clone(),
            target_health: target.health,
            power,
        };
        self.state.stats.attacks_landed += 1;

        let resolution = match resolve_hit(target, report.power) {
            HitOutcome::Wounded {
                health,
                speed,
                boosted,
            } => StrikeResolution::Wounded {
                health,
                speed,
                boosted,
            },
            HitOutcome::Dying { health } => {
                let verdict = Verdict::draw(self.state.rng());
                decision::apply_verdict(&mut self.state.roster, plan.target, verdict);
                match verdict {
                    Verdict::Spared => self.state.stats.revivals += 1,
                    Verdict::Condemned => self.state.stats.eliminations += 1,
                }
                tracing::debug!(
                    target = %report.target_name,
                    verdict = verdict.as_str(),
                    "mercy decision"
                );
                StrikeResolution::Decided {
                    health,
                    verdict,
                    survivors: self.state.roster.len(),
                }
            }
        };

        tracing::trace!(
            attacker = %report.attacker_name,
            target = %report.target_name,
            power = report.power,
            "strike landed"
        );
        StrikeResult::Landed { report, resolution }
    }

    fn cancel(&mut self, plan: &AttackPlan) -> StrikeResult {
        self.state.stats.stale_attacks += 1;
        tracing::trace!(
            attacker = %plan.attacker,
            target = %plan.target,
            "strike cancelled, participant already gone"
        );
        StrikeResult::Stale
    }

    /// Closes the round in flight once all of its strikes have settled.
    pub fn finish_round(&mut self) -> u32 {
        let round = self.state.phase.round().unwrap_or(self.state.stats.rounds + 1);
        self.advance(SchedulerPhase::RoundComplete { round });
        self.state.stats.rounds = round;
        round
    }

    /// Terminal outcome, once fewer than two gladiators remain.
    pub fn conclude(&mut self) -> Option<BattleOutcome> {
        let outcome = decision::conclude(&self.state.roster)?;
        self.advance(SchedulerPhase::Terminal);
        Some(outcome)
    }

    fn advance(&mut self, next: SchedulerPhase) {
        debug_assert!(
            self.state.phase.can_advance_to(next),
            "illegal phase transition {:?} -> {:?}",
            self.state.phase,
            next
        );
        self.state.phase = next;
    }
}
