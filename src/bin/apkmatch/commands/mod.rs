//! Command implementations

pub mod completions;
pub mod resolve;
pub mod variant;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use apkmatch::util::config::{load_config_for, Config};
use apkmatch::util::diagnostic::suggestions;

/// Load the configuration for the current directory.
fn current_config() -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(load_config_for(&cwd))
}

/// Device specs from the command line, falling back to the config.
fn device_spec_paths(flags: Vec<PathBuf>, config: &Config) -> Result<Vec<PathBuf>> {
    if !flags.is_empty() {
        return Ok(flags);
    }

    match &config.device.spec {
        Some(path) => Ok(vec![path.clone()]),
        None => bail!("no device spec given\nhelp: {}", suggestions::NO_DEVICE_SPEC),
    }
}
