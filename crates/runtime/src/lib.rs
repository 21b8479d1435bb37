//! Runtime orchestration for the gladiator arena.
//!
//! This crate adds timing and concurrency on top of the pure rules in
//! `game-core`. Consumers embed [`Runtime`] to run battles, subscribe to
//! events, and observe the roster through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the lifecycle controller and builder
//! - [`api`] exposes the output port, handle and error types
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`timer`] abstracts the attack delays so tests can run on a paused clock
//! - [`workers`] runs rounds of concurrent attack tasks
pub mod api;
pub mod config;
pub mod events;
pub mod runtime;
pub mod timer;
pub mod workers;

pub use api::{OutputPort, PortSet, Result, RuntimeError, RuntimeHandle};
pub use config::RuntimeConfig;
pub use events::{CombatEvent, Event, EventBus, LifecycleEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder};
pub use timer::{Timer, TokioTimer};
pub use workers::{RoundReport, RoundScheduler, SharedBattle};
