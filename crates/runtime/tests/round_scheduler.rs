//! Round-level behavior of the scheduler: barrier, stale cancellation and
//! mercy decisions.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use common::{Note, Recorder, Script, roster};
use game_core::{BattleState, GladiatorId, SchedulerPhase};
use runtime::{RoundReport, RoundScheduler, SharedBattle, Timer, TokioTimer};

/// Counts attack tasks that made it past their delay.
#[derive(Default)]
struct CountingTimer {
    inner: TokioTimer,
    woke: AtomicUsize,
}

#[async_trait]
impl Timer for CountingTimer {
    async fn sleep_ticks(&self, ticks: f64) {
        self.inner.sleep_ticks(ticks).await;
        self.woke.fetch_add(1, Ordering::SeqCst);
    }
}

fn shared(rows: &[(&str, i32, f64, f64)], samples: &[f64]) -> SharedBattle {
    let mut state = BattleState::new(Script::new(samples));
    state.begin_battle(1, roster(rows));
    Arc::new(Mutex::new(state))
}

#[tokio::test(start_paused = true)]
async fn round_returns_only_after_every_task_settled() {
    let battle = shared(
        &[
            ("Aulus", 100, 1.5, 3.0),
            ("Brutus", 100, 4.2, 3.0),
            ("Cassius", 100, 2.8, 3.0),
        ],
        &[0.5, 0.9, 0.1],
    );
    let timer = Arc::new(CountingTimer::default());
    let scheduler = RoundScheduler::new(timer.clone(), Arc::new(Recorder::default()));

    let report = scheduler.run_round(&battle).await.unwrap().unwrap();

    assert_eq!(timer.woke.load(Ordering::SeqCst), 3);
    assert_eq!(report.landed + report.stale, 3);
    assert_eq!(
        battle.lock().await.phase,
        SchedulerPhase::RoundComplete { round: 1 }
    );
}

#[tokio::test(start_paused = true)]
async fn lethal_strike_cancels_the_condemned_attack() {
    // Aulus strikes after 1 tick and kills; the coin condemns Brutus, whose
    // own strike at 5 ticks must find him gone.
    let battle = shared(
        &[("Aulus", 100, 5.0, 20.0), ("Brutus", 10, 1.0, 5.0)],
        &[0.9, 0.1, 0.2],
    );
    let recorder = Recorder::default();
    let scheduler = RoundScheduler::new(Arc::new(TokioTimer::default()), Arc::new(recorder.clone()));

    let report = scheduler.run_round(&battle).await.unwrap().unwrap();

    assert_eq!(
        report,
        RoundReport {
            round: 1,
            landed: 1,
            stale: 1,
            survivors: 1,
        }
    );
    assert_eq!(
        recorder.notes()[1..],
        [
            Note::NearDeath("Brutus".into()),
            Note::Continuation("Brutus".into(), false),
            Note::Count(1),
            Note::RoundComplete(1, 1),
        ]
    );

    let state = battle.lock().await;
    assert_eq!(state.stats.stale_attacks, 1);
    assert_eq!(state.stats.eliminations, 1);
    assert_eq!(state.roster.get(GladiatorId(1)).unwrap().health, 100);
    assert!(!state.roster.contains(GladiatorId(2)));
}

#[tokio::test(start_paused = true)]
async fn mutually_lethal_pair_leaves_one_standing() {
    // Each would kill the other and every coin condemns, but Brutus is
    // removed before his own strike resumes.
    let battle = shared(
        &[("Aulus", 3, 5.0, 5.0), ("Brutus", 3, 1.0, 5.0)],
        &[0.9, 0.1, 0.2, 0.2],
    );
    let recorder = Recorder::default();
    let scheduler = RoundScheduler::new(Arc::new(TokioTimer::default()), Arc::new(recorder.clone()));

    let report = scheduler.run_round(&battle).await.unwrap().unwrap();

    assert_eq!(report.landed, 1);
    assert_eq!(report.stale, 1);
    assert_eq!(report.survivors, 1);
    let condemned: Vec<_> = recorder
        .notes()
        .into_iter()
        .filter(|note| matches!(note, Note::Continuation(_, false)))
        .collect();
    assert_eq!(condemned, [Note::Continuation("Brutus".into(), false)]);

    let state = battle.lock().await;
    assert_eq!(state.roster.get(GladiatorId(1)).unwrap().health, 3);
}

#[tokio::test(start_paused = true)]
async fn spared_gladiator_returns_at_fifty_and_keeps_fighting() {
    let battle = shared(
        &[("Aulus", 100, 5.0, 20.0), ("Brutus", 10, 1.0, 5.0)],
        &[0.9, 0.1, 0.7],
    );
    let recorder = Recorder::default();
    let scheduler = RoundScheduler::new(Arc::new(TokioTimer::default()), Arc::new(recorder.clone()));

    let report = scheduler.run_round(&battle).await.unwrap().unwrap();

    assert_eq!(report.landed, 2);
    assert_eq!(report.survivors, 2);
    assert!(recorder.notes().contains(&Note::Continuation("Brutus".into(), true)));

    let state = battle.lock().await;
    let brutus = state.roster.get(GladiatorId(2)).unwrap();
    assert_eq!(brutus.health, 50);
    // The dying path skips the speed rules.
    assert_eq!(brutus.speed, 1.0);
    assert_eq!(state.roster.get(GladiatorId(1)).unwrap().health, 95);
    assert_eq!(state.stats.revivals, 1);
}

#[tokio::test(start_paused = true)]
async fn negative_interval_fires_immediately() {
    let battle = shared(
        &[("Aulus", 20, 7.5, 3.0), ("Brutus", 100, 1.0, 3.0)],
        &[0.9, 0.1],
    );
    let recorder = Recorder::default();
    let scheduler = RoundScheduler::new(Arc::new(TokioTimer::default()), Arc::new(recorder.clone()));
    let start = tokio::time::Instant::now();

    scheduler.run_round(&battle).await.unwrap();

    let attacks = recorder.attacks();
    assert_eq!(attacks[0].attacker_name, "Aulus");
    assert_eq!(attacks[0].target_health, 100);
    assert!(start.elapsed() >= std::time::Duration::from_millis(3000));
}
