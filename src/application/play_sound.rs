//! Play sound use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PlayerSession, SoundboardRepository};
use std::path::PathBuf;

/// Service for playing a sound through the configured player
pub struct PlaySoundService {
    repository: FileSystemRepository,
}

impl PlaySoundService {
    /// Create a new play sound service
    pub fn new(repository: FileSystemRepository) -> Self {
        PlaySoundService { repository }
    }

    /// Start playback of the sound at `index`. Returns the file handed to
    /// the player.
    pub fn execute(&self, index: usize) -> Result<PathBuf> {
        let config = self.repository.load_config()?;
        let sound = self.repository.store(&config).get(index)?;
        let path = self
            .repository
            .assets(&config)
            .resolve_path(&sound.sound_path)?;

        PlayerSession::new(config.get_player()).play(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::Sound;
    use crate::error::SoundboardError;
    use tempfile::TempDir;

    #[test]
    fn test_play_missing_file_reports_not_found() {
        let temp = TempDir::new().unwrap();
        let config = init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.store(&config)
            .append(Sound::new("Gone", PathBuf::from("/nowhere/gone.wav")))
            .unwrap();

        let result = PlaySoundService::new(repo.clone()).execute(0);

        assert!(matches!(result, Err(SoundboardError::AssetNotFound(_))));
        assert_eq!(repo.store(&config).load().len(), 1);
    }

    #[test]
    fn test_play_out_of_range() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(matches!(
            PlaySoundService::new(repo).execute(0),
            Err(SoundboardError::InvalidIndex { .. })
        ));
    }
}
