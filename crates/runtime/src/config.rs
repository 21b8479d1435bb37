//! Runtime tuning loaded from the environment.
//!
//! Rule constants live in [`game_core::ArenaConfig`]; this only covers how a
//! battle is run (pacing, seeding, buffering and restarts).
use std::env;
use std::time::Duration;

use crate::api::{Result, RuntimeError};
use crate::timer::TokioTimer;

/// Runtime configuration shared across the controller and workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Seed for the default random source; OS entropy when absent.
    pub seed: Option<u64>,
    /// Wall-clock duration of one attack-interval unit.
    pub tick: Duration,
    /// Broadcast capacity per event topic.
    pub event_buffer_size: usize,
    /// Stop auto-restarting after this many battles.
    pub max_battles: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick: TokioTimer::DEFAULT_TICK,
            event_buffer_size: 256,
            max_battles: None,
        }
    }
}

impl RuntimeConfig {
    /// Reads `ARENA_SEED`, `ARENA_TICK_MS`, `ARENA_EVENT_BUFFER` and
    /// `ARENA_MAX_BATTLES`, keeping defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("ARENA_SEED");

        if let Some(ms) = read_env::<u64>("ARENA_TICK_MS") {
            config.tick = Duration::from_millis(ms);
        }

        if let Some(size) = read_env::<usize>("ARENA_EVENT_BUFFER") {
            config.event_buffer_size = size;
        }

        config.max_battles = read_env::<u64>("ARENA_MAX_BATTLES");

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.event_buffer_size == 0 {
            return Err(RuntimeError::InvalidConfig {
                field: "event_buffer_size",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RuntimeConfig::default();
        assert_eq!(config.tick, Duration::from_millis(600));
        assert_eq!(config.event_buffer_size, 256);
        assert!(config.max_battles.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_event_buffer_is_rejected() {
        let config = RuntimeConfig {
            event_buffer_size: 0,
            ..RuntimeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RuntimeError::InvalidConfig {
                field: "event_buffer_size",
                ..
            })
        ));
    }
}
