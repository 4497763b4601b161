//! Soundboard workspace on the file system

use crate::error::{Result, SoundboardError};
use crate::infrastructure::assets::SoundFileRepository;
use crate::infrastructure::config::{Config, META_DIR};
use crate::infrastructure::preferences::FilePreferences;
use crate::infrastructure::store::SoundStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for soundboard workspaces
pub trait SoundboardRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .soundboard/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .soundboard/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .soundboard directory exists
    fn is_initialized(&self) -> bool;

    /// Create .soundboard directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SoundboardRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover soundboard root by walking up from current directory
    /// First checks SOUNDBOARD_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check SOUNDBOARD_ROOT environment variable first
        if let Ok(root_path) = std::env::var("SOUNDBOARD_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(SoundboardError::Config(format!(
                    "SOUNDBOARD_ROOT is set to '{}' but no .soundboard directory found. \
                    Run 'soundboard init' in that directory or unset SOUNDBOARD_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover soundboard root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_meta_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                // Reached filesystem root without finding .soundboard
                None => return Err(SoundboardError::NotSoundboardDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    /// Preference file holding the sound list
    pub fn preferences_path(&self) -> PathBuf {
        self.root.join(META_DIR).join("preferences.json")
    }

    /// Sound list for this workspace
    pub fn store(&self, config: &Config) -> SoundStore<FilePreferences> {
        SoundStore::new(
            FilePreferences::new(self.preferences_path()),
            config.store_key.clone(),
        )
    }

    /// Audio files for this workspace
    pub fn assets(&self, config: &Config) -> SoundFileRepository {
        SoundFileRepository::new(config.asset_dir_in(&self.root))
    }
}

impl SoundboardRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(META_DIR);

        if meta_dir.exists() {
            return Err(SoundboardError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&meta_dir)?;
        Ok(())
    }
}
