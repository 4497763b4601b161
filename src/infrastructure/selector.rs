//! File selection

use crate::error::{Result, SoundboardError};
use std::path::PathBuf;

/// Audio extensions accepted when adding a sound
pub const AUDIO_TYPES: &[&str] = &["mp3", "wav", "m4a", "aac", "aiff", "aif", "caf", "ogg", "flac"];

/// Outcome of asking the user for files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    Cancelled,
    Selected(Vec<PathBuf>),
}

/// Something that can ask the user to pick files
pub trait FileSelector {
    /// `types` are accepted extensions, compared case-insensitively
    fn request_file_selection(&self, types: &[&str], allow_multiple: bool)
        -> Result<FileSelection>;
}

/// Selection taken from paths given on the command line.
///
/// No paths means the user made no choice.
#[derive(Debug, Clone, Default)]
pub struct ArgumentSelector {
    paths: Vec<PathBuf>,
}

impl ArgumentSelector {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        ArgumentSelector { paths }
    }
}

impl From<Option<PathBuf>> for ArgumentSelector {
    fn from(path: Option<PathBuf>) -> Self {
        ArgumentSelector::new(path.into_iter().collect())
    }
}

impl FileSelector for ArgumentSelector {
    fn request_file_selection(
        &self,
        types: &[&str],
        allow_multiple: bool,
    ) -> Result<FileSelection> {
        if self.paths.is_empty() {
            return Ok(FileSelection::Cancelled);
        }

        if !allow_multiple && self.paths.len() > 1 {
            return Err(SoundboardError::Config(format!(
                "Expected a single file, got {}",
                self.paths.len()
            )));
        }

        for path in &self.paths {
            let accepted = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| types.iter().any(|t| t.eq_ignore_ascii_case(ext)));
            if !accepted {
                return Err(SoundboardError::UnsupportedFileType(path.clone()));
            }
        }

        Ok(FileSelection::Selected(self.paths.clone()))
    }
}
