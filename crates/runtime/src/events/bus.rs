//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tokio::sync::broadcast;

use game_core::{AttackReport, BattleOutcome, Roster};

use super::types::{CombatEvent, LifecycleEvent};
use crate::api::OutputPort;

/// Topics for event routing
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Strikes, near-deaths and mercy decisions
    Combat,
    /// Battle start/end, roster counts, round boundaries, victories
    Lifecycle,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Combat(CombatEvent),
    Lifecycle(LifecycleEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Combat(_) => Topic::Combat,
            Event::Lifecycle(_) => Topic::Lifecycle,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Implements [`OutputPort`] so the battle can
/// publish through it directly.
#[derive(Clone)]
pub struct EventBus {
    combat: broadcast::Sender<Event>,
    lifecycle: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            combat: broadcast::channel(capacity).0,
            lifecycle: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Lifecycle => &self.lifecycle,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Subscribe to every topic.
    pub fn subscribe_all(&self) -> HashMap<Topic, broadcast::Receiver<Event>> {
        let topics: Vec<Topic> = Topic::iter().collect();
        self.subscribe_multiple(&topics)
    }

    fn combat(&self, event: CombatEvent) {
        self.publish(Event::Combat(event));
    }

    fn lifecycle(&self, event: LifecycleEvent) {
        self.publish(Event::Lifecycle(event));
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for EventBus {
    fn on_attack(&self, report: &AttackReport) {
        self.combat(CombatEvent::Attack(report.clone()));
    }

    fn on_near_death(&self, name: &str) {
        self.combat(CombatEvent::NearDeath { name: name.into() });
    }

    fn on_continuation(&self, name: &str, revived: bool) {
        self.combat(CombatEvent::Continuation {
            name: name.into(),
            revived,
        });
    }

    fn on_victory(&self, name: &str, health: i32) {
        self.lifecycle(LifecycleEvent::Victory {
            name: name.into(),
            health,
        });
    }

    fn on_count_changed(&self, count: usize) {
        self.lifecycle(LifecycleEvent::CountChanged { count });
    }

    fn on_battle_started(&self, battle: u64, roster: &Roster) {
        self.lifecycle(LifecycleEvent::BattleStarted {
            battle,
            gladiators: roster.iter().cloned().collect(),
        });
    }

    fn on_round_complete(&self, round: u32, survivors: usize) {
        self.lifecycle(LifecycleEvent::RoundComplete { round, survivors });
    }

    fn on_battle_concluded(&self, battle: u64, outcome: &BattleOutcome) {
        self.lifecycle(LifecycleEvent::BattleConcluded {
            battle,
            outcome: outcome.clone(),
        });
    }
}
