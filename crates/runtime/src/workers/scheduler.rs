//! Round scheduler that drives timed attack tasks.
//!
//! Each round is planned by [`ArenaEngine::begin_round`] and executed as one
//! tokio task per attacker inside a [`JoinSet`]. Tasks sleep on the injected
//! [`Timer`], then resolve their strike under the state lock. The lock is
//! never held across a suspension point, so every strike is atomic with
//! respect to the other tasks of its round.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, trace};

use game_core::{ArenaEngine, AttackPlan, BattleState, StrikeResolution, StrikeResult};

use crate::api::{OutputPort, Result, RuntimeError};
use crate::timer::Timer;

/// Battle state shared between the controller and its attack tasks.
pub type SharedBattle = Arc<Mutex<BattleState>>;

/// Summary of one fully settled round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub landed: u32,
    /// Strikes cancelled because a participant left mid-round.
    pub stale: u32,
    pub survivors: usize,
}

/// Runs rounds of concurrent attacks until the battle is decided.
#[derive(Clone)]
pub struct RoundScheduler {
    timer: Arc<dyn Timer>,
    port: Arc<dyn OutputPort>,
}

impl RoundScheduler {
    pub fn new(timer: Arc<dyn Timer>, port: Arc<dyn OutputPort>) -> Self {
        Self { timer, port }
    }

    /// Runs one round to completion.
    ///
    /// Returns `Ok(None)` without spawning anything when fewer than two
    /// gladiators remain. Otherwise every attack task of the round has
    /// settled by the time this resolves.
    pub async fn run_round(&self, battle: &SharedBattle) -> Result<Option<RoundReport>> {
        let plans = {
            let mut state = battle.lock().await;
            ArenaEngine::new(&mut state).begin_round()
        };
        let Some(plans) = plans else {
            return Ok(None);
        };

        let mut tasks = JoinSet::new();
        for plan in plans {
            tasks.spawn(strike(
                plan,
                Arc::clone(battle),
                Arc::clone(&self.timer),
                Arc::clone(&self.port),
            ));
        }

        let mut landed = 0;
        let mut stale = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(RuntimeError::AttackTask)? {
                StrikeResult::Stale => stale += 1,
                StrikeResult::Landed { .. } => landed += 1,
            }
        }

        let (round, survivors) = {
            let mut state = battle.lock().await;
            let round = ArenaEngine::new(&mut state).finish_round();
            (round, state.roster.len())
        };
        self.port.on_round_complete(round, survivors);
        debug!(round, landed, stale, survivors, "round complete");

        Ok(Some(RoundReport {
            round,
            landed,
            stale,
            survivors,
        }))
    }

    /// Runs rounds until at most one gladiator remains.
    ///
    /// Returns the number of rounds played.
    pub async fn run_to_completion(&self, battle: &SharedBattle) -> Result<u32> {
        let mut rounds = 0;
        while self.run_round(battle).await?.is_some() {
            rounds += 1;
        }
        Ok(rounds)
    }
}

/// Body of a single attack task.
async fn strike(
    plan: AttackPlan,
    battle: SharedBattle,
    timer: Arc<dyn Timer>,
    port: Arc<dyn OutputPort>,
) -> StrikeResult {
    timer.sleep_ticks(plan.delay_ticks()).await;

    let mut state = battle.lock().await;
    let result = ArenaEngine::new(&mut state).resolve_attack(&plan);
    // Notify while still holding the lock so observers see strikes in the
    // order they were applied.
    announce(port.as_ref(), &result);
    drop(state);

    trace!(round = plan.round, attacker = %plan.attacker, "attack task settled");
    result
}

fn announce(port: &dyn OutputPort, result: &StrikeResult) {
    let StrikeResult::Landed { report, resolution } = result else {
        return;
    };

    port.on_attack(report);
    if let StrikeResolution::Decided {
        verdict, survivors, ..
    } = resolution
    {
        port.on_near_death(&report.target_name);
        port.on_continuation(&report.target_name, verdict.revived());
        port.on_count_changed(*survivors);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use game_core::{Gladiator, GladiatorId, RandomSource, Roster};

    use super::*;
    use crate::timer::TokioTimer;

    struct Script(Vec<f64>, usize);

    impl RandomSource for Script {
        fn next_unit(&mut self) -> f64 {
            let value = self.0[self.1 % self.0.len()];
            self.1 += 1;
            value
        }
    }

    #[derive(Default)]
    struct Log(StdMutex<Vec<String>>);

    impl Log {
        fn push(&self, line: String) {
            self.0.lock().unwrap().push(line);
        }

        fn lines(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl OutputPort for Log {
        fn on_attack(&self, report: &game_core::AttackReport) {
            self.push(format!("attack {}->{}", report.attacker_name, report.target_name));
        }

        fn on_near_death(&self, name: &str) {
            self.push(format!("near_death {name}"));
        }

        fn on_continuation(&self, name: &str, revived: bool) {
            self.push(format!("continuation {name} {revived}"));
        }

        fn on_victory(&self, name: &str, health: i32) {
            self.push(format!("victory {name} {health}"));
        }

        fn on_count_changed(&self, count: usize) {
            self.push(format!("count {count}"));
        }

        fn on_round_complete(&self, round: u32, survivors: usize) {
            self.push(format!("round {round} {survivors}"));
        }
    }

    fn battle(gladiators: Vec<Gladiator>, samples: Vec<f64>) -> SharedBattle {
        let mut state = BattleState::new(Script(samples, 0));
        let roster = Roster::from_gladiators(gladiators).unwrap();
        state.begin_battle(1, roster);
        Arc::new(Mutex::new(state))
    }

    fn scheduler(log: Arc<Log>) -> RoundScheduler {
        RoundScheduler::new(Arc::new(TokioTimer::default()), log)
    }

    #[tokio::test(start_paused = true)]
    async fn round_settles_every_task_before_returning() {
        let shared = battle(
            vec![
                Gladiator::new(GladiatorId(1), "Crixus", 100, 2.0, 3.0),
                Gladiator::new(GladiatorId(2), "Spartacus", 100, 4.0, 3.0),
            ],
            vec![0.9, 0.1],
        );
        let log = Arc::new(Log::default());

        let report = scheduler(log.clone())
            .run_round(&shared)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.landed, 2);
        assert_eq!(report.stale, 0);
        assert_eq!(report.survivors, 2);

        // The faster gladiator lands first.
        assert_eq!(
            log.lines(),
            vec![
                "attack Spartacus->Crixus",
                "attack Crixus->Spartacus",
                "round 1 2",
            ]
        );

        let state = shared.lock().await;
        assert_eq!(state.stats.rounds, 1);
        assert_eq!(state.stats.attacks_landed, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn finished_battle_plans_no_round() {
        let shared = battle(
            vec![Gladiator::new(GladiatorId(1), "Verus", 90, 3.0, 3.0)],
            vec![0.5],
        );
        let log = Arc::new(Log::default());

        let report = scheduler(log.clone()).run_round(&shared).await.unwrap();

        assert!(report.is_none());
        assert!(log.lines().is_empty());
    }
}
