//! Colosseum client binary.
//!
//! Runs gladiator battles back to back and prints every event to stdout.
//!
//! # Environment
//!
//! - `ARENA_SEED`: replay a battle sequence deterministically
//! - `ARENA_TICK_MS`: milliseconds per attack-interval unit (default 600)
//! - `ARENA_EVENT_BUFFER`: event bus capacity per topic (default 256)
//! - `ARENA_MAX_BATTLES`: stop after this many battles (default: never)
//! - `ARENA_OUTPUT`: `text` (default) or `json`
//! - `ARENA_LOG_DIR`: also write logs to `colosseum.log` in this directory
//! - `RUST_LOG`: log filter (default `info`)
//!
//! # Examples
//!
//! ```bash
//! ARENA_SEED=7 ARENA_MAX_BATTLES=1 ARENA_TICK_MS=50 cargo run -p colosseum-client
//! ```

use anyhow::Result;
use colosseum_client::{ClientConfig, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env()?;
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting Colosseum client");
    tracing::info!("Seed: {:?}", config.runtime.seed);
    tracing::info!("Battle limit: {:?}", config.runtime.max_battles);

    let battles = colosseum_client::run(config).await?;

    tracing::info!("Client shutdown complete after {battles} battles");
    Ok(())
}
