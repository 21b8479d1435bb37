//! Cloneable façade for observing a running battle.
//!
//! [`RuntimeHandle`] shares the battle state and the event bus with the
//! [`crate::Runtime`] that created it. Reads take the state lock briefly and
//! return owned snapshots, so a handle never stalls an attack task.
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, broadcast};

use game_core::{BattleState, BattleStats, Roster, SchedulerPhase};

use crate::events::{Event, EventBus, Topic};

/// Client-facing handle to inspect the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    state: Arc<Mutex<BattleState>>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(state: Arc<Mutex<BattleState>>, event_bus: EventBus) -> Self {
        Self { state, event_bus }
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Combat` - Strikes, near-deaths and mercy decisions
    /// - `Topic::Lifecycle` - Battle boundaries, roster counts and victories
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut combat_rx = handle.subscribe(Topic::Combat);
    /// while let Ok(event) = combat_rx.recv().await {
    ///     // Render the strike
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Snapshot of the current roster.
    pub async fn roster(&self) -> Roster {
        self.state.lock().await.roster.clone()
    }

    pub async fn stats(&self) -> BattleStats {
        self.state.lock().await.stats
    }

    pub async fn phase(&self) -> SchedulerPhase {
        self.state.lock().await.phase
    }
}
