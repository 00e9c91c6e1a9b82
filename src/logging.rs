use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "REPLAY_LOG";

/// Sends tracing output to the log file; the terminal belongs to the viewer
pub fn init(config: &Config) -> Result<()> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(&config.logging.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| color_eyre::eyre::eyre!("could not initialise logging: {error}"))?;

    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}

fn filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
