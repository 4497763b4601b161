//! Import use case
//!
//! Reads a bundle and appends its sounds after the existing ones. Each sound
//! gets a new audio file. Import is lenient: if an entry fails, the sounds
//! already added stay and the failure is reported with the count.

use crate::domain::bundle::{self, BUNDLE_EXTENSION};
use crate::domain::Sound;
use crate::error::{Result, SoundboardError};
use crate::infrastructure::{
    FileSelection, FileSelector, FileSystemRepository, Preferences, SoundFileRepository,
    SoundStore, SoundboardRepository,
};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Sounds added by a completed import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub imported: usize,
    pub sounds: Vec<Sound>,
}

/// Decode `bytes` and append every entry to `store`, in bundle order.
///
/// A bundle that cannot be decoded leaves the store untouched and returns
/// [`SoundboardError::Import`]. A failure while materializing entry `n`
/// returns [`SoundboardError::PartialImport`] with `imported == n`.
pub fn import_bundle<P: Preferences>(
    bytes: &[u8],
    store: &SoundStore<P>,
    assets: &SoundFileRepository,
) -> Result<ImportSummary> {
    let bundle = bundle::decode(bytes).map_err(|e| SoundboardError::Import(Box::new(e)))?;

    let partial = |e: SoundboardError, imported: usize| SoundboardError::PartialImport {
        imported,
        source: Box::new(e),
    };

    let mut sounds = Vec::with_capacity(bundle.sounds.len());
    for entry in bundle.sounds {
        let path = assets
            .store_bytes(&entry.sound_data, &entry.sound_extension)
            .map_err(|e| partial(e, sounds.len()))?;

        let sound = Sound::new(entry.label, path.clone())
            .with_colour(entry.colour)
            .with_image(entry.image);

        if let Err(e) = store.append(sound.clone()) {
            if let Err(cleanup) = assets.delete(&path) {
                warn!(path = %path.display(), error = %cleanup, "could not remove unused audio file");
            }
            return Err(partial(e, sounds.len()));
        }

        sounds.push(sound);
    }

    info!(imported = sounds.len(), "imported bundle");

    Ok(ImportSummary {
        imported: sounds.len(),
        sounds,
    })
}

/// Service for importing bundle files into the soundboard
pub struct ImportService {
    repository: FileSystemRepository,
}

impl ImportService {
    /// Create a new import service
    pub fn new(repository: FileSystemRepository) -> Self {
        ImportService { repository }
    }

    /// Import the bundle at `path`
    pub fn execute(&self, path: &Path) -> Result<ImportSummary> {
        let config = self.repository.load_config()?;
        let bytes = fs::read(path).map_err(|e| {
            SoundboardError::Import(Box::new(SoundboardError::AssetIo {
                path: path.to_path_buf(),
                source: e,
            }))
        })?;

        import_bundle(
            &bytes,
            &self.repository.store(&config),
            &self.repository.assets(&config),
        )
    }

    /// Ask `selector` for a bundle and import it. Returns `None` when the
    /// user made no choice.
    pub fn execute_selected(&self, selector: &dyn FileSelector) -> Result<Option<ImportSummary>> {
        match selector.request_file_selection(&[BUNDLE_EXTENSION], false)? {
            FileSelection::Cancelled => Ok(None),
            FileSelection::Selected(paths) => match paths.first() {
                Some(path) => self.execute(path).map(Some),
                None => Ok(None),
            },
        }
    }
}
