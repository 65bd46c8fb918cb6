use crate::config::{default_config_toml, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a default `.hailstats.toml` in the current directory.
pub fn init_config(force: bool) -> Result<PathBuf> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    Ok(config_path)
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(config_path, default_config_toml())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}
