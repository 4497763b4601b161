//! Export use case
//!
//! Collects every sound's audio bytes and writes a self-contained bundle.
//! An export either includes every sound or produces nothing.

use crate::domain::bundle::{self, Bundle, BundleEntry, BUNDLE_EXTENSION};
use crate::domain::Sound;
use crate::error::{Result, SoundboardError};
use crate::infrastructure::preferences::write_atomic;
use crate::infrastructure::{FileSystemRepository, SoundFileRepository, SoundboardRepository};
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

/// What an export wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub sounds: usize,
    pub bytes: usize,
}

/// Build bundle bytes for `sounds`, in order.
///
/// Fails on the first sound whose audio cannot be read at its recorded path
/// or in the asset directory.
pub fn export_sounds(
    sounds: &[Sound],
    assets: &SoundFileRepository,
    exported_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let entries = sounds
        .iter()
        .map(|sound| {
            let sound_data =
                assets
                    .resolve(&sound.sound_path)
                    .map_err(|e| SoundboardError::Export {
                        label: sound.label.clone(),
                        source: Box::new(e),
                    })?;

            Ok(BundleEntry {
                label: sound.label.clone(),
                colour: sound.colour,
                sound_data,
                sound_extension: sound.extension(),
                image: sound.image.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    bundle::encode(&Bundle::new(entries, exported_at))
}

/// Default bundle file name for an export made on `date`
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("soundboard-{}.{}", date.format("%Y-%m-%d"), BUNDLE_EXTENSION)
}

/// Service for exporting the soundboard to a bundle file
pub struct ExportService {
    repository: FileSystemRepository,
}

impl ExportService {
    /// Create a new export service
    pub fn new(repository: FileSystemRepository) -> Self {
        ExportService { repository }
    }

    /// Export every sound to `output`.
    ///
    /// The file is only created once the whole bundle has been built.
    pub fn execute(&self, output: &Path) -> Result<ExportSummary> {
        let config = self.repository.load_config()?;
        let sounds = self.repository.store(&config).load();
        let assets = self.repository.assets(&config);

        let bytes = export_sounds(&sounds, &assets, Utc::now().trunc_subsecs(0))?;
        write_atomic(output, &bytes)?;

        info!(path = %output.display(), sounds = sounds.len(), "exported soundboard");

        Ok(ExportSummary {
            path: output.to_path_buf(),
            sounds: sounds.len(),
            bytes: bytes.len(),
        })
    }
}
