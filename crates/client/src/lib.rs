//! Console front end for the gladiator arena.
//!
//! The binary is the composition root: it loads [`ClientConfig`], installs
//! logging, builds a [`runtime::Runtime`] with a [`ConsolePort`] observer and
//! lets it restart battles until the configured limit.

pub mod config;
pub mod logging;
pub mod presentation;

pub use config::{ClientConfig, OutputFormat};
pub use presentation::ConsolePort;

use anyhow::Result;
use runtime::Runtime;

/// Assemble the runtime from `config` and run battles until it stops.
///
/// Returns the number of battles fought.
pub async fn run(config: ClientConfig) -> Result<u64> {
    let console = ConsolePort::new(config.output, std::io::stdout());

    let mut runtime = Runtime::builder()
        .config(config.runtime)
        .observer(console)
        .build()?;

    let battles = runtime.run().await?;
    Ok(battles)
}
