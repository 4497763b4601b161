//! Initialize soundboard use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, SoundboardRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new soundboard at the specified path.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::default();
    repo.save_config(&config)?;
    fs::create_dir_all(config.asset_dir_in(path))?;

    info!(root = %path.display(), "initialized soundboard");
    Ok(config)
}
