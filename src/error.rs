//! Error types for soundboard

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the soundboard application
#[derive(Debug, Error)]
pub enum SoundboardError {
    #[error("Not a soundboard directory: {0}")]
    NotSoundboardDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error on {}: {source}", .path.display())]
    AssetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Sound file not found: {}", .0.display())]
    AssetNotFound(PathBuf),

    #[error("Invalid bundle format: {0}")]
    BundleFormat(String),

    #[error("Bundle could not be decoded: {0}")]
    BundleDecode(String),

    #[error("Export failed for sound '{label}': {source}")]
    Export {
        label: String,
        #[source]
        source: Box<SoundboardError>,
    },

    #[error("Import failed: {0}")]
    Import(#[source] Box<SoundboardError>),

    #[error("Import stopped after {imported} sound(s): {source}")]
    PartialImport {
        imported: usize,
        #[source]
        source: Box<SoundboardError>,
    },

    #[error("No sound at position {} (soundboard has {len})", .index + 1)]
    InvalidIndex { index: usize, len: usize },

    #[error("Stored sounds cannot be read: {0}")]
    CorruptStore(String),

    #[error("Invalid sound: {0}")]
    InvalidSound(String),

    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Player error: {0}")]
    Player(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SoundboardError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SoundboardError::NotSoundboardDirectory(_) => 2,
            SoundboardError::AssetNotFound(_) => 3,
            SoundboardError::Import(_) | SoundboardError::PartialImport { .. } => 4,
            SoundboardError::Export { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SoundboardError::NotSoundboardDirectory(path) => {
                format!(
                    "Not a soundboard directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'soundboard init' in this directory to create a new soundboard\n\
                    • Navigate to an existing soundboard directory\n\
                    • Set SOUNDBOARD_ROOT environment variable to your soundboard path",
                    path.display()
                )
            }
            SoundboardError::AssetNotFound(path) => {
                format!(
                    "Sound file not found: {}\n\n\
                    Suggestions:\n\
                    • Check that the file was not moved or deleted\n\
                    • Copy the file back into the soundboard's sounds directory\n\
                    • Remove the sound with 'soundboard remove <index>' and add it again",
                    path.display()
                )
            }
            SoundboardError::Export { label, source } => {
                format!(
                    "Export failed for sound '{}': {}\n\n\
                    No bundle was written.\n\
                    Fix or remove the sound, then export again.",
                    label, source
                )
            }
            SoundboardError::Import(source) => {
                format!(
                    "Import failed: {}\n\n\
                    Your soundboard was not changed.\n\
                    Check that the file is a .stosb bundle exported by soundboard.",
                    source
                )
            }
            SoundboardError::PartialImport { imported, source } => {
                format!(
                    "Import stopped after {} sound(s): {}\n\n\
                    Sounds imported before the failure were kept.\n\
                    Check free disk space and permissions on the sounds directory.",
                    imported, source
                )
            }
            SoundboardError::InvalidIndex { len, .. } => {
                format!(
                    "{}\n\n\
                    Use 'soundboard list' to see positions (1 to {}).",
                    self, len
                )
            }
            SoundboardError::CorruptStore(msg) => {
                format!(
                    "Stored sounds cannot be read: {}\n\n\
                    Nothing was deleted.\n\
                    Restore .soundboard/preferences.json from a backup or remove it to start over.",
                    msg
                )
            }
            SoundboardError::Player(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your player is installed and in PATH\n\
                    • Set SOUNDBOARD_PLAYER environment variable (e.g., export SOUNDBOARD_PLAYER=aplay)\n\
                    • Configure player: soundboard config player 'mpv --no-video'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SoundboardError
pub type Result<T> = std::result::Result<T, SoundboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_soundboard_directory_suggestion() {
        let err = SoundboardError::NotSoundboardDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("soundboard init"));
        assert!(msg.contains("SOUNDBOARD_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_export_error_names_sound() {
        let err = SoundboardError::Export {
            label: "Boing".to_string(),
            source: Box::new(SoundboardError::AssetNotFound(PathBuf::from("/x/a.wav"))),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'Boing'"));
        assert!(msg.contains("No bundle was written"));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_partial_import_reports_count() {
        let err = SoundboardError::PartialImport {
            imported: 2,
            source: Box::new(SoundboardError::Config("disk full".to_string())),
        };
        assert!(err.to_string().contains("after 2 sound(s)"));
        assert!(err.display_with_suggestions().contains("were kept"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_invalid_index_is_one_based() {
        let err = SoundboardError::InvalidIndex { index: 4, len: 3 };
        assert_eq!(err.to_string(), "No sound at position 5 (soundboard has 3)");
        assert!(err.display_with_suggestions().contains("1 to 3"));
    }

    #[test]
    fn test_player_error_suggestions() {
        let err = SoundboardError::Player("Player not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("SOUNDBOARD_PLAYER"));
        assert!(msg.contains("soundboard config player"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = SoundboardError::Config("bad key".to_string());
        assert_eq!(err.display_with_suggestions(), "Configuration error: bad key");
        assert_eq!(err.exit_code(), 1);
    }
}
