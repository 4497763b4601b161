//! Remove sound use case

use crate::domain::Sound;
use crate::error::{Result, SoundboardError};
use crate::infrastructure::{
    FileSystemRepository, Preferences, SoundFileRepository, SoundStore, SoundboardRepository,
};
use tracing::{info, warn};

/// A removed sound and, if its audio file could not be deleted, why
#[derive(Debug)]
pub struct RemovedSound {
    pub sound: Sound,
    pub asset_error: Option<SoundboardError>,
}

/// Remove the sound at `index`.
///
/// The sound leaves the list first. Its audio file is then deleted
/// best-effort; a failure there leaves an orphaned file behind and is
/// reported in [`RemovedSound::asset_error`].
pub fn remove_sound<P: Preferences>(
    store: &SoundStore<P>,
    assets: &SoundFileRepository,
    index: usize,
) -> Result<RemovedSound> {
    let sound = store.remove(index)?;
    info!(index, label = %sound.label, "removed sound");

    let asset_error = assets.delete(&sound.sound_path).err();
    if let Some(e) = &asset_error {
        warn!(path = %sound.sound_path.display(), error = %e, "could not delete audio file");
    }

    Ok(RemovedSound { sound, asset_error })
}

/// Service for removing sounds
pub struct RemoveSoundService {
    repository: FileSystemRepository,
}

impl RemoveSoundService {
    /// Create a new remove sound service
    pub fn new(repository: FileSystemRepository) -> Self {
        RemoveSoundService { repository }
    }

    pub fn execute(&self, index: usize) -> Result<RemovedSound> {
        let config = self.repository.load_config()?;
        remove_sound(
            &self.repository.store(&config),
            &self.repository.assets(&config),
            index,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::preferences::FailingPreferences;
    use crate::infrastructure::MemoryPreferences;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_remove_deletes_file_and_entry() {
        let temp = TempDir::new().unwrap();
        let assets = SoundFileRepository::new(temp.path().join("sounds"));
        let store = SoundStore::new(MemoryPreferences::new(), "sounds");
        let a = assets.store_bytes(b"a", "wav").unwrap();
        let b = assets.store_bytes(b"b", "wav").unwrap();
        store.append(Sound::new("A", a.clone())).unwrap();
        store.append(Sound::new("B", b.clone())).unwrap();

        let removed = remove_sound(&store, &assets, 0).unwrap();

        assert_eq!(removed.sound.label, "A");
        assert!(removed.asset_error.is_none());
        assert!(!a.exists());
        assert!(b.exists());
        assert_eq!(store.load(), vec![Sound::new("B", b)]);
    }

    #[test]
    fn test_remove_with_missing_file_still_removes_entry() {
        let temp = TempDir::new().unwrap();
        let assets = SoundFileRepository::new(temp.path().join("sounds"));
        let store = SoundStore::new(MemoryPreferences::new(), "sounds");
        store
            .append(Sound::new("Gone", PathBuf::from("/nowhere/gone.wav")))
            .unwrap();

        let removed = remove_sound(&store, &assets, 0).unwrap();

        assert!(matches!(
            removed.asset_error,
            Some(SoundboardError::AssetNotFound(_))
        ));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_remove_out_of_range_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let assets = SoundFileRepository::new(temp.path().join("sounds"));
        let store = SoundStore::new(MemoryPreferences::new(), "sounds");
        let a = assets.store_bytes(b"a", "wav").unwrap();
        store.append(Sound::new("A", a.clone())).unwrap();

        assert!(remove_sound(&store, &assets, 1).is_err());
        assert!(a.exists());
        assert_eq!(fs::read(&a).unwrap(), b"a");
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_remove_keeps_file_when_list_write_fails() {
        let temp = TempDir::new().unwrap();
        let assets = SoundFileRepository::new(temp.path().join("sounds"));
        let store = SoundStore::new(
            FailingPreferences::new(1),
            "sounds",
        );
        let a = assets.store_bytes(b"a", "wav").unwrap();
        store.append(Sound::new("A", a.clone())).unwrap();

        let result = remove_sound(&store, &assets, 0);

        assert!(matches!(result, Err(SoundboardError::Io(_))));
        assert_eq!(store.load(), vec![Sound::new("A", a.clone())]);
        assert_eq!(fs::read(&a).unwrap(), b"a");
    }
}
