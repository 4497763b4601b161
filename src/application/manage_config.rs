//! Config management use case

use crate::error::{Result, SoundboardError};
use crate::infrastructure::{Config, FileSystemRepository, SoundboardRepository};
use std::path::PathBuf;

/// Service for managing soundboard configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "asset_dir" => Ok(config.asset_dir.display().to_string()),
            "store_key" => Ok(config.store_key),
            "player" => Ok(config.get_player()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SoundboardError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: asset_dir, store_key, player, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "asset_dir" => {
                if value.trim().is_empty() {
                    return Err(SoundboardError::Config(
                        "asset_dir cannot be empty".to_string(),
                    ));
                }
                config.asset_dir = PathBuf::from(value);
            }
            "store_key" => {
                if value.trim().is_empty() {
                    return Err(SoundboardError::Config(
                        "store_key cannot be empty".to_string(),
                    ));
                }
                config.store_key = value.to_string();
            }
            "player" => {
                config.player = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "created" => {
                return Err(SoundboardError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SoundboardError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: asset_dir, store_key, player",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
