//! Helpers shared by the headless binaries: config loading and log setup.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use daycrawl_core::GameConfig;
use tracing_subscriber::EnvFilter;

/// Reads a TOML config; keys it leaves out keep their defaults.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: GameConfig =
        toml::from_str(&text).with_context(|| format!("Invalid config in {}", path.display()))?;
    config.validate().with_context(|| format!("Rejected config in {}", path.display()))?;
    Ok(config)
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}
