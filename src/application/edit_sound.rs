//! Edit sound use case

use crate::domain::{Colour, Sound};
use crate::error::Result;
use crate::infrastructure::assets::encode_image_file;
use crate::infrastructure::{
    FileSystemRepository, Preferences, SoundFileRepository, SoundStore, SoundboardRepository,
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Changes to apply to a sound; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct SoundEdit {
    pub label: Option<String>,
    /// `Some(None)` clears the colour
    pub colour: Option<Option<Colour>>,
    /// `Some(None)` clears the image
    pub image: Option<Option<PathBuf>>,
    /// Replacement audio file
    pub audio: Option<PathBuf>,
}

/// Apply `edit` to the sound at `index`.
///
/// New audio is copied in before the sound is replaced; the old file is then
/// removed on a best-effort basis.
pub fn edit_sound<P: Preferences>(
    store: &SoundStore<P>,
    assets: &SoundFileRepository,
    index: usize,
    edit: SoundEdit,
) -> Result<Sound> {
    let mut sound = store.get(index)?;

    if let Some(label) = edit.label {
        sound.label = label;
    }
    if let Some(colour) = edit.colour {
        sound.colour = colour;
    }
    if let Some(image) = edit.image {
        sound.image = image.as_deref().map(encode_image_file).transpose()?;
    }
    sound.validate()?;

    let new_audio = edit
        .audio
        .as_deref()
        .map(|audio| assets.import_audio(audio))
        .transpose()?;
    if let Some(path) = &new_audio {
        sound.sound_path = path.clone();
    }

    let previous = match store.replace(index, sound.clone()) {
        Ok(previous) => previous,
        Err(e) => {
            if let Some(path) = &new_audio {
                if let Err(cleanup) = assets.delete(path) {
                    warn!(path = %path.display(), error = %cleanup, "could not remove unused audio file");
                }
            }
            return Err(e);
        }
    };

    if new_audio.is_some() && previous.sound_path != sound.sound_path {
        if let Err(e) = assets.delete(&previous.sound_path) {
            warn!(path = %previous.sound_path.display(), error = %e, "could not remove replaced audio file");
        }
    }

    info!(index, label = %sound.label, "edited sound");
    Ok(sound)
}

/// Service for editing sounds
pub struct EditSoundService {
    repository: FileSystemRepository,
}

impl EditSoundService {
    /// Create a new edit sound service
    pub fn new(repository: FileSystemRepository) -> Self {
        EditSoundService { repository }
    }

    pub fn execute(&self, index: usize, edit: SoundEdit) -> Result<Sound> {
        let config = self.repository.load_config()?;
        edit_sound(
            &self.repository.store(&config),
            &self.repository.assets(&config),
            index,
            edit,
        )
    }
}
