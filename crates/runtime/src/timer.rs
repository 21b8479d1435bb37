//! Timer abstraction used to delay attack tasks.
//!
//! Delays are expressed in ticks (attack-interval units). The default
//! [`TokioTimer`] sleeps on the tokio clock, so tests running with a paused
//! clock advance through whole battles instantly and deterministically.
use std::time::Duration;

use async_trait::async_trait;

/// Suspends an attack task for its computed delay.
#[async_trait]
pub trait Timer: Send + Sync {
    /// Sleep for `ticks` attack-interval units. Non-positive values return
    /// without waiting for a timer.
    async fn sleep_ticks(&self, ticks: f64);
}

/// Sleeps `ticks * tick` on the tokio clock.
#[derive(Debug, Clone, Copy)]
pub struct TokioTimer {
    tick: Duration,
}

impl TokioTimer {
    pub const DEFAULT_TICK: Duration = Duration::from_millis(600);

    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Wall-clock delay for `ticks`, clamped at zero.
    pub fn delay_for(&self, ticks: f64) -> Duration {
        if ticks.is_finite() && ticks > 0.0 {
            let nanos = (self.tick.as_nanos() as f64 * ticks).round();
            Duration::from_nanos(nanos as u64)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for TokioTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICK)
    }
}

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep_ticks(&self, ticks: f64) {
        let delay = self.delay_for(ticks);
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}
