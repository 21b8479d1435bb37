//! Topic-based event bus for battle events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need. The bus is the default [`crate::OutputPort`].

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{CombatEvent, LifecycleEvent};
