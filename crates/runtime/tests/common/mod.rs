//! Shared fixtures for runtime integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use game_core::{AttackReport, BattleOutcome, Gladiator, GladiatorId, RandomSource, Roster};
use runtime::OutputPort;

/// Replays a fixed cycle of unit samples.
///
/// In a two-gladiator roster `0.9` picks position 1 and `0.1` picks
/// position 0. For the mercy coin `0.7` spares and `0.2` condemns.
pub struct Script {
    values: Vec<f64>,
    cursor: usize,
}

impl Script {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for Script {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Everything an output port can be told, in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum Note {
    Attack(AttackReport),
    NearDeath(String),
    Continuation(String, bool),
    Victory(String, i32),
    Count(usize),
    Started(u64, usize),
    RoundComplete(u32, usize),
    Concluded(u64, BattleOutcome),
}

#[derive(Clone, Default)]
pub struct Recorder {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl Recorder {
    pub fn notes(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    pub fn victories(&self) -> Vec<(String, i32)> {
        self.notes()
            .into_iter()
            .filter_map(|note| match note {
                Note::Victory(name, health) => Some((name, health)),
                _ => None,
            })
            .collect()
    }

    pub fn attacks(&self) -> Vec<AttackReport> {
        self.notes()
            .into_iter()
            .filter_map(|note| match note {
                Note::Attack(report) => Some(report),
                _ => None,
            })
            .collect()
    }

    fn push(&self, note: Note) {
        self.notes.lock().unwrap().push(note);
    }
}

impl OutputPort for Recorder {
    fn on_attack(&self, report: &AttackReport) {
        self.push(Note::Attack(report.clone()));
    }

    fn on_near_death(&self, name: &str) {
        self.push(Note::NearDeath(name.to_owned()));
    }

    fn on_continuation(&self, name: &str, revived: bool) {
        self.push(Note::Continuation(name.to_owned(), revived));
    }

    fn on_victory(&self, name: &str, health: i32) {
        self.push(Note::Victory(name.to_owned(), health));
    }

    fn on_count_changed(&self, count: usize) {
        self.push(Note::Count(count));
    }

    fn on_battle_started(&self, battle: u64, roster: &Roster) {
        self.push(Note::Started(battle, roster.len()));
    }

    fn on_round_complete(&self, round: u32, survivors: usize) {
        self.push(Note::RoundComplete(round, survivors));
    }

    fn on_battle_concluded(&self, battle: u64, outcome: &BattleOutcome) {
        self.push(Note::Concluded(battle, outcome.clone()));
    }
}

/// `(name, health, speed, power)` rows in roster order, ids from 1.
pub fn roster(rows: &[(&str, i32, f64, f64)]) -> Roster {
    Roster::from_gladiators(rows.iter().enumerate().map(|(i, &(name, health, speed, power))| {
        Gladiator::new(GladiatorId(i as u32 + 1), name, health, speed, power)
    }))
    .unwrap()
}
