use std::time::Duration;

use anyhow::Context;

const DEFAULT_SIMULATED_WORK_MS: u64 = 200;

/// The configuration parameters for the worker lambda.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long each healthy message pretends to be worked on.
    /// Overridden through `SIMULATED_WORK_MS`.
    pub simulated_work: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulated_work: Duration::from_millis(DEFAULT_SIMULATED_WORK_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let simulated_work = match std::env::var("SIMULATED_WORK_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse()
                    .context("SIMULATED_WORK_MS must be a whole number of milliseconds")?,
            ),
            Err(_) => Duration::from_millis(DEFAULT_SIMULATED_WORK_MS),
        };

        Ok(Config { simulated_work })
    }
}
