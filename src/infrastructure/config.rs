//! Configuration management

use crate::error::{Result, SoundboardError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-soundboard metadata directory
pub const META_DIR: &str = ".soundboard";

fn default_asset_dir() -> PathBuf {
    PathBuf::from("sounds")
}

fn default_store_key() -> String {
    "sounds".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Managed asset area, relative to the soundboard root
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    /// Preference slot holding the sound list
    #[serde(default = "default_store_key")]
    pub store_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,

    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            asset_dir: default_asset_dir(),
            store_key: default_store_key(),
            player: None,
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .soundboard/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join("config.toml");

        // A missing config means the directory was never initialized
        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SoundboardError::NotSoundboardDirectory(path.to_path_buf())
            } else {
                SoundboardError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SoundboardError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .soundboard/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        let config_path = meta_dir.join("config.toml");

        // Create .soundboard directory if needed
        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Absolute location of the managed asset area
    pub fn asset_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.asset_dir)
    }

    /// Get the player command, checking the environment first
    pub fn get_player(&self) -> String {
        // Environment wins over the config file, then the platform default
        std::env::var("SOUNDBOARD_PLAYER")
            .ok()
            .or_else(|| self.player.clone())
            .unwrap_or_else(|| Self::default_player().to_string())
    }

    fn default_player() -> &'static str {
        if cfg!(target_os = "macos") {
            "afplay"
        } else {
            "ffplay -nodisp -autoexit -loglevel quiet"
        }
    }
}
