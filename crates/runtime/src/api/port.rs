//! Output port through which the battle announces what happens.
//!
//! The presentation layer owns the implementation. Calls are fire-and-forget
//! and are made while a strike resolves, so implementations must not block.
use std::sync::Arc;

use game_core::{AttackReport, BattleOutcome, Roster};

/// Sink for battle notifications.
///
/// The first five methods are required; the lifecycle hooks default to
/// no-ops for consumers that only render the fight itself.
pub trait OutputPort: Send + Sync {
    /// A strike landed. Healths are taken before damage.
    fn on_attack(&self, report: &AttackReport);

    /// A gladiator's health reached zero or below.
    fn on_near_death(&self, name: &str);

    /// The mercy decision for a dying gladiator: `revived` means health was
    /// reset to 50, otherwise they were removed.
    fn on_continuation(&self, name: &str, revived: bool);

    fn on_victory(&self, name: &str, health: i32);

    /// Roster size after creation, a decision, or a reset.
    fn on_count_changed(&self, count: usize);

    fn on_battle_started(&self, _battle: u64, _roster: &Roster) {}

    fn on_round_complete(&self, _round: u32, _survivors: usize) {}

    fn on_battle_concluded(&self, _battle: u64, _outcome: &BattleOutcome) {}
}

impl<T: OutputPort + ?Sized> OutputPort for Arc<T> {
    fn on_attack(&self, report: &AttackReport) {
        (**self).on_attack(report);
    }

    fn on_near_death(&self, name: &str) {
        (**self).on_near_death(name);
    }

    fn on_continuation(&self, name: &str, revived: bool) {
        (**self).on_continuation(name, revived);
    }

    fn on_victory(&self, name: &str, health: i32) {
        (**self).on_victory(name, health);
    }

    fn on_count_changed(&self, count: usize) {
        (**self).on_count_changed(count);
    }

    fn on_battle_started(&self, battle: u64, roster: &Roster) {
        (**self).on_battle_started(battle, roster);
    }

    fn on_round_complete(&self, round: u32, survivors: usize) {
        (**self).on_round_complete(round, survivors);
    }

    fn on_battle_concluded(&self, battle: u64, outcome: &BattleOutcome) {
        (**self).on_battle_concluded(battle, outcome);
    }
}

/// Fans every notification out to several ports in order.
#[derive(Clone, Default)]
pub struct PortSet {
    ports: Vec<Arc<dyn OutputPort>>,
}

impl PortSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, port: Arc<dyn OutputPort>) {
        self.ports.push(port);
    }

    /// Moves every port of `other` to the end of this set.
    pub fn append(&mut self, other: PortSet) {
        self.ports.extend(other.ports);
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl OutputPort for PortSet {
    fn on_attack(&self, report: &AttackReport) {
        self.ports.iter().for_each(|p| p.on_attack(report));
    }

    fn on_near_death(&self, name: &str) {
        self.ports.iter().for_each(|p| p.on_near_death(name));
    }

    fn on_continuation(&self, name: &str, revived: bool) {
        self.ports.iter().for_each(|p| p.on_continuation(name, revived));
    }

    fn on_victory(&self, name: &str, health: i32) {
        self.ports.iter().for_each(|p| p.on_victory(name, health));
    }

    fn on_count_changed(&self, count: usize) {
        self.ports.iter().for_each(|p| p.on_count_changed(count));
    }

    fn on_battle_started(&self, battle: u64, roster: &Roster) {
        self.ports.iter().for_each(|p| p.on_battle_started(battle, roster));
    }

    fn on_round_complete(&self, round: u32, survivors: usize) {
        self.ports
            .iter()
            .for_each(|p| p.on_round_complete(round, survivors));
    }

    fn on_battle_concluded(&self, battle: u64, outcome: &BattleOutcome) {
        self.ports
            .iter()
            .for_each(|p| p.on_battle_concluded(battle, outcome));
    }
}
