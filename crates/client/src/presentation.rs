//! Console rendering of battle events.
//!
//! [`ConsolePort`] is the client's [`OutputPort`]: each notification becomes
//! one line on the writer, either narrated text or a JSON object.

use std::io::Write;
use std::sync::Mutex;

use game_core::{AttackReport, BattleOutcome, Roster};
use runtime::{CombatEvent, Event, LifecycleEvent, OutputPort};

use crate::config::OutputFormat;

pub struct ConsolePort<W> {
    format: OutputFormat,
    out: Mutex<W>,
}

impl<W: Write + Send> ConsolePort<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out: Mutex::new(out),
        }
    }

    /// Returns the writer, dropping the port.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit(&self, event: Event) {
        let line = match self.format {
            OutputFormat::Text => match describe(&event) {
                Some(line) => line,
                None => return,
            },
            OutputFormat::Json => match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(err) => {
                    tracing::warn!("failed to encode event: {err}");
                    return;
                }
            },
        };

        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = writeln!(out, "{line}") {
            tracing::warn!("failed to write event: {err}");
        }
    }
}

/// Narrated form of an event; `None` for events the text view skips.
pub fn describe(event: &Event) -> Option<String> {
    let line = match event {
        Event::Combat(CombatEvent::Attack(report)) => format!(
            "[{} x {}] hits [{} x {}] with power {:.1}",
            report.attacker_name,
            report.attacker_health,
            report.target_name,
            report.target_health,
            report.power
        ),
        Event::Combat(CombatEvent::NearDeath { name }) => format!("[{name}] is dying"),
        Event::Combat(CombatEvent::Continuation {
            name,
            revived: true,
        }) => format!("Caesar made decision to continue with [{name}], +50 health points"),
        Event::Combat(CombatEvent::Continuation {
            name,
            revived: false,
        }) => format!("Caesar made decision to continue without [{name}]"),
        Event::Lifecycle(LifecycleEvent::BattleStarted { battle, gladiators }) => {
            let names: Vec<&str> = gladiators.iter().map(|g| g.name.as_str()).collect();
            format!("Battle {battle} begins: {}", names.join(", "))
        }
        Event::Lifecycle(LifecycleEvent::CountChanged { count }) => {
            format!("gladiators count: {count}")
        }
        Event::Lifecycle(LifecycleEvent::Victory { name, health }) => {
            format!("[{name}] won the battle with health x {health}!")
        }
        Event::Lifecycle(LifecycleEvent::BattleConcluded {
            outcome: BattleOutcome::NoSurvivor,
            ..
        }) => "No gladiator survived the battle".to_owned(),
        Event::Lifecycle(
            LifecycleEvent::RoundComplete { .. } | LifecycleEvent::BattleConcluded { .. },
        ) => return None,
    };
    Some(line)
}

impl<W: Write + Send> OutputPort for ConsolePort<W> {
    fn on_attack(&self, report: &AttackReport) {
        self.emit(Event::Combat(CombatEvent::Attack(report.clone())));
    }

    fn on_near_death(&self, name: &str) {
        self.emit(Event::Combat(CombatEvent::NearDeath { name: name.into() }));
    }

    fn on_continuation(&self, name: &str, revived: bool) {
        self.emit(Event::Combat(CombatEvent::Continuation {
            name: name.into(),
            revived,
        }));
    }

    fn on_victory(&self, name: &str, health: i32) {
        self.emit(Event::Lifecycle(LifecycleEvent::Victory {
            name: name.into(),
            health,
        }));
    }

    fn on_count_changed(&self, count: usize) {
        self.emit(Event::Lifecycle(LifecycleEvent::CountChanged { count }));
    }

    fn on_battle_started(&self, battle: u64, roster: &Roster) {
        self.emit(Event::Lifecycle(LifecycleEvent::BattleStarted {
            battle,
            gladiators: roster.iter().cloned().collect(),
        }));
    }

    fn on_round_complete(&self, round: u32, survivors: usize) {
        self.emit(Event::Lifecycle(LifecycleEvent::RoundComplete { round, survivors }));
    }

    fn on_battle_concluded(&self, battle: u64, outcome: &BattleOutcome) {
        self.emit(Event::Lifecycle(LifecycleEvent::BattleConcluded {
            battle,
            outcome: outcome.clone(),
        }));
    }
}
