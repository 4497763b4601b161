//! Audio files in the managed asset area

use crate::domain::sound::extension_of;
use crate::error::{Result, SoundboardError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;
use walkdir::WalkDir;

/// Owns the audio files referenced by sounds.
///
/// Files are looked up at their recorded path first; if that fails, the
/// same file name inside the asset directory is tried.
#[derive(Debug, Clone)]
pub struct SoundFileRepository {
    asset_dir: PathBuf,
}

impl SoundFileRepository {
    pub fn new(asset_dir: PathBuf) -> Self {
        SoundFileRepository { asset_dir }
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Copy an audio file into the asset area under a fresh name,
    /// keeping its extension
    pub fn import_audio(&self, source: &Path) -> Result<PathBuf> {
        let bytes = fs::read(source).map_err(|e| asset_io(source, e))?;
        self.store_bytes(&bytes, &extension_of(source))
    }

    /// Write audio bytes into the asset area under a fresh name
    pub fn store_bytes(&self, bytes: &[u8], extension: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.asset_dir).map_err(|e| asset_io(&self.asset_dir, e))?;

        let path = self.asset_dir.join(unique_file_name(extension));
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| asset_io(&path, e))?;

        if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(asset_io(&path, e));
        }

        debug!(path = %path.display(), bytes = bytes.len(), "stored audio file");
        Ok(path)
    }

    /// Read a sound's audio bytes, trying the fallback location if needed
    pub fn resolve(&self, asset: &Path) -> Result<Vec<u8>> {
        let primary_error = match fs::read(asset) {
            Ok(bytes) => return Ok(bytes),
            Err(e) => e,
        };

        let Some(fallback) = self.fallback_path(asset).filter(|p| p != asset) else {
            return Err(not_found_or_io(asset, primary_error));
        };

        debug!(
            asset = %asset.display(),
            fallback = %fallback.display(),
            error = %primary_error,
            "primary asset path unreadable, trying fallback"
        );

        fs::read(&fallback).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                not_found_or_io(asset, primary_error)
            } else {
                asset_io(&fallback, e)
            }
        })
    }

    /// Locate a sound's audio file, trying the fallback location if needed
    pub fn resolve_path(&self, asset: &Path) -> Result<PathBuf> {
        if asset.is_file() {
            return Ok(asset.to_path_buf());
        }

        match self.fallback_path(asset) {
            Some(fallback) if fallback.is_file() => {
                debug!(
                    asset = %asset.display(),
                    fallback = %fallback.display(),
                    "using fallback asset path"
                );
                Ok(fallback)
            }
            _ => Err(SoundboardError::AssetNotFound(asset.to_path_buf())),
        }
    }

    /// Remove a sound's audio file
    pub fn delete(&self, asset: &Path) -> Result<()> {
        let path = self.resolve_path(asset)?;
        fs::remove_file(&path).map_err(|e| asset_io(&path, e))?;
        debug!(path = %path.display(), "deleted audio file");
        Ok(())
    }

    /// Regular files directly inside the asset area, sorted by name
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        if !self.asset_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.asset_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.asset_dir.as_path()).to_path_buf();
                match e.into_io_error() {
                    Some(io) => asset_io(&path, io),
                    None => SoundboardError::AssetNotFound(path),
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            // Skip leftovers from interrupted writes and hidden files
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            files.push(entry.into_path());
        }

        files.sort();
        Ok(files)
    }

    fn fallback_path(&self, asset: &Path) -> Option<PathBuf> {
        asset.file_name().map(|name| self.asset_dir.join(name))
    }
}

/// Read an image file and encode it for inline storage on a sound
pub fn encode_image_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| asset_io(path, e))?;
    Ok(STANDARD.encode(bytes))
}

/// Longest extension kept on stored files
const MAX_EXTENSION_LEN: usize = 16;

/// `extension` if it is one short alphanumeric component, otherwise empty
fn safe_extension(extension: &str) -> &str {
    let plain = !extension.is_empty()
        && extension.len() <= MAX_EXTENSION_LEN
        && extension.chars().all(|c| c.is_ascii_alphanumeric());

    if plain {
        extension
    } else {
        if !extension.is_empty() {
            warn!(extension = %extension.escape_debug(), "dropping unusable file extension");
        }
        ""
    }
}

fn unique_file_name(extension: &str) -> String {
    let id = Uuid::new_v4();
    match safe_extension(extension) {
        "" => id.to_string(),
        ext => format!("{}.{}", id, ext),
    }
}

fn asset_io(path: &Path, source: std::io::Error) -> SoundboardError {
    SoundboardError::AssetIo {
        path: path.to_path_buf(),
        source,
    }
}

fn not_found_or_io(path: &Path, source: std::io::Error) -> SoundboardError {
    if source.kind() == std::io::ErrorKind::NotFound {
        SoundboardError::AssetNotFound(path.to_path_buf())
    } else {
        asset_io(path, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo(temp: &TempDir) -> SoundFileRepository {
        SoundFileRepository::new(temp.path().join("sounds"))
    }

    #[test]
    fn test_import_audio_copies_with_fresh_name() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("boing.mp3");
        fs::write(&source, b"audio").unwrap();

        let repo = repo(&temp);
        let first = repo.import_audio(&source).unwrap();
        let second = repo.import_audio(&source).unwrap();

        assert_ne!(first, second);
        assert_eq!(first.parent().unwrap(), repo.asset_dir());
        assert_eq!(first.extension().unwrap(), "mp3");
        assert_ne!(first.file_name().unwrap(), "boing.mp3");
        assert_eq!(fs::read(&first).unwrap(), b"audio");
        assert!(source.exists());
    }

    #[test]
    fn test_import_audio_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = repo(&temp).import_audio(&temp.path().join("nope.wav"));
        assert!(matches!(result, Err(SoundboardError::AssetIo { .. })));
    }

    #[test]
    fn test_store_bytes_without_extension() {
        let temp = TempDir::new().unwrap();
        let path = repo(&temp).store_bytes(b"x", "").unwrap();
        assert!(path.extension().is_none());
        assert_eq!(fs::read(path).unwrap(), b"x");
    }

    #[test]
    fn test_store_bytes_drops_unsafe_extension() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);

        for extension in ["wav/nested", "wav/../../escaped", "..", "a\\b", "wa\0v", "x.y"] {
            let path = repo.store_bytes(b"x", extension).unwrap();
            assert_eq!(path.parent().unwrap(), repo.asset_dir());
            assert!(path.extension().is_none(), "kept {:?}", extension);
        }

        let long = "a".repeat(MAX_EXTENSION_LEN + 1);
        assert!(repo.store_bytes(b"x", &long).unwrap().extension().is_none());
        assert!(!temp.path().join("escaped").exists());
        assert_eq!(repo.list_files().unwrap().len(), 7);
    }

    #[test]
    fn test_store_bytes_keeps_plain_extension() {
        let temp = TempDir::new().unwrap();
        let path = repo(&temp).store_bytes(b"x", "M4A").unwrap();
        assert_eq!(path.extension().unwrap(), "M4A");
    }

    #[test]
    fn test_resolve_primary() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        let path = repo.store_bytes(b"abc", "wav").unwrap();

        assert_eq!(repo.resolve(&path).unwrap(), b"abc");
        assert_eq!(repo.resolve_path(&path).unwrap(), path);
    }

    #[test]
    fn test_resolve_falls_back_to_asset_dir() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        let stored = repo.store_bytes(b"abc", "wav").unwrap();

        // Recorded path points at a location that no longer exists
        let stale = PathBuf::from("/old/machine/sounds").join(stored.file_name().unwrap());

        assert_eq!(repo.resolve(&stale).unwrap(), b"abc");
        assert_eq!(repo.resolve_path(&stale).unwrap(), stored);
    }

    #[test]
    fn test_resolve_missing_everywhere() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        let stale = PathBuf::from("/old/machine/sounds/gone.wav");

        match repo.resolve(&stale) {
            Err(SoundboardError::AssetNotFound(path)) => assert_eq!(path, stale),
            other => panic!("Expected AssetNotFound, got {:?}", other),
        }
        assert!(matches!(
            repo.resolve_path(&stale),
            Err(SoundboardError::AssetNotFound(_))
        ));
    }

    #[test]
    fn test_delete() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        let path = repo.store_bytes(b"abc", "wav").unwrap();

        repo.delete(&path).unwrap();
        assert!(!path.exists());
        assert!(matches!(
            repo.delete(&path),
            Err(SoundboardError::AssetNotFound(_))
        ));
    }

    #[test]
    fn test_list_files() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        assert!(repo.list_files().unwrap().is_empty());

        let a = repo.store_bytes(b"a", "wav").unwrap();
        let b = repo.store_bytes(b"b", "mp3").unwrap();
        fs::create_dir(repo.asset_dir().join("nested")).unwrap();
        fs::write(repo.asset_dir().join(".DS_Store"), b"").unwrap();

        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(repo.list_files().unwrap(), expected);
    }

    #[test]
    fn test_encode_image_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("icon.png");
        fs::write(&path, [0u8, 1, 2]).unwrap();

        assert_eq!(encode_image_file(&path).unwrap(), "AAEC");
    }
}
