//! Prune orphaned audio files use case
//!
//! Removing a sound whose file could not be deleted, or an interrupted
//! import, can leave files in the asset area that no sound refers to.

use crate::error::Result;
use crate::infrastructure::{
    FilePreferences, FileSystemRepository, Preferences, SoundFileRepository, SoundStore,
    SoundboardRepository,
};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Asset files not referenced by any sound, by file name.
///
/// Sounds under every slot in `preferences` count as references. Fails with
/// [`crate::SoundboardError::CorruptStore`] if any slot cannot be read, since
/// its references are then unknown.
pub fn find_orphans<P: Preferences>(
    preferences: &P,
    assets: &SoundFileRepository,
) -> Result<Vec<PathBuf>> {
    let mut referenced = HashSet::new();
    for key in preferences.keys()? {
        let sounds = SoundStore::new(preferences, key).try_load()?;
        referenced.extend(sounds.iter().map(|s| s.file_name()));
    }

    Ok(assets
        .list_files()?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .map(|n| !referenced.contains(n.to_string_lossy().as_ref()))
                .unwrap_or(false)
        })
        .collect())
}

/// Service for finding and deleting orphaned audio files
pub struct PruneService {
    repository: FileSystemRepository,
}

impl PruneService {
    /// Create a new prune service
    pub fn new(repository: FileSystemRepository) -> Self {
        PruneService { repository }
    }

    /// List orphaned files, deleting them when `delete` is true
    pub fn execute(&self, delete: bool) -> Result<Vec<PathBuf>> {
        let config = self.repository.load_config()?;
        let preferences = FilePreferences::new(self.repository.preferences_path());
        let orphans = find_orphans(&preferences, &self.repository.assets(&config))?;

        if delete {
            for path in &orphans {
                fs::remove_file(path)?;
            }
            info!(count = orphans.len(), "deleted orphaned audio files");
        }

        Ok(orphans)
    }
}
