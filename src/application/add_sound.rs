//! Add sound use case

use crate::domain::{Colour, Sound};
use crate::error::Result;
use crate::infrastructure::assets::encode_image_file;
use crate::infrastructure::selector::AUDIO_TYPES;
use crate::infrastructure::{
    FileSelection, FileSelector, FileSystemRepository, Preferences, SoundFileRepository,
    SoundStore, SoundboardRepository,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Details for a new button
#[derive(Debug, Clone, Default)]
pub struct NewSound {
    pub label: String,
    pub colour: Option<Colour>,
    /// Image file to embed in the sound
    pub image: Option<PathBuf>,
}

/// Copy `audio` into the asset area and append a sound for it
pub fn add_sound<P: Preferences>(
    store: &SoundStore<P>,
    assets: &SoundFileRepository,
    audio: &Path,
    new: NewSound,
) -> Result<Sound> {
    let image = new.image.as_deref().map(encode_image_file).transpose()?;

    // Validate before copying anything
    Sound::new(new.label.clone(), PathBuf::new())
        .with_image(image.clone())
        .validate()?;

    let path = assets.import_audio(audio)?;
    let sound = Sound::new(new.label, path.clone())
        .with_colour(new.colour)
        .with_image(image);

    if let Err(e) = store.append(sound.clone()) {
        if let Err(cleanup) = assets.delete(&path) {
            warn!(path = %path.display(), error = %cleanup, "could not remove unused audio file");
        }
        return Err(e);
    }

    info!(label = %sound.label, path = %path.display(), "added sound");
    Ok(sound)
}

/// Service for adding sounds to the soundboard
pub struct AddSoundService {
    repository: FileSystemRepository,
}

impl AddSoundService {
    /// Create a new add sound service
    pub fn new(repository: FileSystemRepository) -> Self {
        AddSoundService { repository }
    }

    pub fn execute(&self, audio: &Path, new: NewSound) -> Result<Sound> {
        let config = self.repository.load_config()?;
        add_sound(
            &self.repository.store(&config),
            &self.repository.assets(&config),
            audio,
            new,
        )
    }

    /// Ask `selector` for an audio file and add it. Returns `None` when the
    /// user made no choice.
    pub fn execute_selected(
        &self,
        selector: &dyn FileSelector,
        new: NewSound,
    ) -> Result<Option<Sound>> {
        match selector.request_file_selection(AUDIO_TYPES, false)? {
            FileSelection::Cancelled => Ok(None),
            FileSelection::Selected(paths) => match paths.first() {
                Some(path) => self.execute(path, new).map(Some),
                None => Ok(None),
            },
        }
    }
}
