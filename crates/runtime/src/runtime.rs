//! High-level battle lifecycle controller.
//!
//! The runtime owns the shared battle state, wires the event bus and any
//! extra observers into a single output port, and exposes a builder-based
//! API for clients to start battles and restart them after each conclusion.

use std::sync::Arc;

use tokio::sync::{Mutex, broadcast};
use tracing::{debug, info};

use game_core::{
    ArenaEngine, BattleOutcome, BattleRng, BattleState, BattleStats, LatinNames, NameSource,
    RandomSource, Roster, SchedulerPhase, create_roster,
};

use crate::api::{OutputPort, PortSet, Result, RuntimeHandle};
use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, Topic};
use crate::timer::{Timer, TokioTimer};
use crate::workers::{RoundScheduler, SharedBattle};

/// Main runtime that orchestrates battles
///
/// Design: Runtime owns the battle state and the round scheduler.
/// [`RuntimeHandle`] provides a cloneable façade for observers.
pub struct Runtime {
    config: RuntimeConfig,
    state: SharedBattle,
    names: Arc<dyn NameSource>,
    port: Arc<dyn OutputPort>,
    scheduler: RoundScheduler,
    handle: RuntimeHandle,
    battles: u64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to battle events on a topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    pub async fn roster(&self) -> Roster {
        self.handle.roster().await
    }

    pub async fn stats(&self) -> BattleStats {
        self.handle.stats().await
    }

    pub async fn phase(&self) -> SchedulerPhase {
        self.handle.phase().await
    }

    /// Number of battles started by this runtime so far.
    pub fn battles_started(&self) -> u64 {
        self.battles
    }

    /// Rolls a fresh roster and runs it to its conclusion.
    pub async fn start_battle(&mut self) -> Result<BattleOutcome> {
        let roster = {
            let mut state = self.state.lock().await;
            state.reset();
            create_roster(&mut state, self.names.as_ref())?
        };
        self.run_battle(roster).await
    }

    /// Runs a caller-supplied roster to its conclusion.
    ///
    /// The state is reset afterwards whether the battle concluded or a task
    /// failed, so the runtime is ready for the next battle either way.
    pub async fn run_battle(&mut self, roster: Roster) -> Result<BattleOutcome> {
        self.battles += 1;
        let battle = self.battles;

        let count = {
            let mut state = self.state.lock().await;
            state.begin_battle(battle, roster);
            let count = state.roster.len();
            self.port.on_count_changed(count);
            self.port.on_battle_started(battle, &state.roster);
            count
        };
        info!(battle, gladiators = count, "battle started");

        let result = self.fight(battle).await;
        self.reset().await;
        result
    }

    /// Starts battle after battle until `max_battles` is reached.
    ///
    /// Without a limit this only returns on error. Returns the total number
    /// of battles this runtime has started.
    pub async fn run(&mut self) -> Result<u64> {
        loop {
            if self
                .config
                .max_battles
                .is_some_and(|max| self.battles >= max)
            {
                info!(battles = self.battles, "battle limit reached");
                return Ok(self.battles);
            }
            self.start_battle().await?;
        }
    }

    async fn fight(&self, battle: u64) -> Result<BattleOutcome> {
        let rounds = self.scheduler.run_to_completion(&self.state).await?;

        let (outcome, stats) = {
            let mut state = self.state.lock().await;
            let outcome = ArenaEngine::new(&mut state)
                .conclude()
                .unwrap_or(BattleOutcome::NoSurvivor);
            (outcome, state.stats)
        };

        if let BattleOutcome::Victor { name, health, .. } = &outcome {
            self.port.on_victory(name, *health);
        }
        self.port.on_battle_concluded(battle, &outcome);

        info!(
            battle,
            rounds,
            winner = outcome.winner_name().unwrap_or("none"),
            revivals = stats.revivals,
            eliminations = stats.eliminations,
            "battle concluded"
        );
        Ok(outcome)
    }

    async fn reset(&self) {
        self.state.lock().await.reset();
        self.port.on_count_changed(0);
        debug!("battle state reset");
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    random_source: Option<Box<dyn RandomSource>>,
    name_source: Option<Arc<dyn NameSource>>,
    timer: Option<Arc<dyn Timer>>,
    observers: PortSet,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            random_source: None,
            name_source: None,
            timer: None,
            observers: PortSet::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the random stream. Defaults to a [`BattleRng`] seeded from
    /// the config, or from OS entropy.
    pub fn random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.random_source = Some(Box::new(source));
        self
    }

    /// Replace the gladiator name generator. Defaults to [`LatinNames`].
    pub fn name_source(mut self, names: impl NameSource + 'static) -> Self {
        self.name_source = Some(Arc::new(names));
        self
    }

    /// Replace the attack delay timer. Defaults to a [`TokioTimer`] using the
    /// configured tick.
    pub fn timer(mut self, timer: impl Timer + 'static) -> Self {
        self.timer = Some(Arc::new(timer));
        self
    }

    /// Add an output port notified alongside the event bus.
    ///
    /// May be called several times; observers are notified in the order they
    /// were added, after the bus.
    pub fn observer(mut self, port: impl OutputPort + 'static) -> Self {
        self.observers.push(Arc::new(port));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        self.config.validate()?;

        let rng: Box<dyn RandomSource> = match self.random_source {
            Some(source) => source,
            None => Box::new(
                self.config
                    .seed
                    .map_or_else(BattleRng::from_entropy, BattleRng::new),
            ),
        };
        let state: SharedBattle = Arc::new(Mutex::new(BattleState::with_boxed_rng(rng)));

        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let mut ports = PortSet::new();
        ports.push(Arc::new(event_bus.clone()));
        ports.append(self.observers);
        let port: Arc<dyn OutputPort> = Arc::new(ports);

        let timer: Arc<dyn Timer> = match self.timer {
            Some(timer) => timer,
            None => Arc::new(TokioTimer::new(self.config.tick)),
        };
        let scheduler = RoundScheduler::new(timer, Arc::clone(&port));

        let names: Arc<dyn NameSource> = match self.name_source {
            Some(names) => names,
            None => Arc::new(LatinNames),
        };
        let handle = RuntimeHandle::new(Arc::clone(&state), event_bus);

        debug!(config = ?self.config, "runtime built");

        Ok(Runtime {
            config: self.config,
            state,
            names,
            port,
            scheduler,
            handle,
            battles: 0,
        })
    }
}
