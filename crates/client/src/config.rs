//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use runtime::RuntimeConfig;

/// How battle events are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One narrated line per event.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown output format `{other}` (expected text or json)"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    pub output: OutputFormat,
    /// Also write logs to `colosseum.log` in this directory.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Runtime settings come from [`RuntimeConfig::from_env`]; the client adds
    /// `ARENA_OUTPUT` and `ARENA_LOG_DIR`.
    pub fn from_env() -> anyhow::Result<Self> {
        let output = match env::var("ARENA_OUTPUT") {
            Ok(value) => value.parse()?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Self {
            runtime: RuntimeConfig::from_env(),
            output,
            log_dir: env::var_os("ARENA_LOG_DIR").map(PathBuf::from),
        })
    }
}
