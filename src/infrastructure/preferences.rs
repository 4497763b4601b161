//! Key-value preference storage
//!
//! The sound list is persisted as a single string blob under a named key,
//! the way a desktop app keeps small state in its user defaults.

use crate::error::{Result, SoundboardError};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Named string slots
pub trait Preferences {
    fn get(&self, key: &str) -> Option<String>;

    /// Like `get`, but unreadable storage is an error instead of an empty slot
    fn try_get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    /// Overwrite the slot; the write is all-or-nothing
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Names of every stored slot
    fn keys(&self) -> Result<Vec<String>>;
}

impl<P: Preferences + ?Sized> Preferences for &P {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn try_get(&self, key: &str) -> Result<Option<String>> {
        (**self).try_get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}

/// Preferences kept as a JSON object on disk
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: PathBuf) -> Self {
        FilePreferences { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every slot. A missing file is empty; an unreadable or corrupt one is an error.
    fn try_read_all(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&contents).map_err(|e| {
            SoundboardError::CorruptStore(format!("{}: {}", self.path.display(), e))
        })
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        self.try_read_all().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "cannot read preferences, ignoring them");
            BTreeMap::new()
        })
    }
}

impl Preferences for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn try_get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.try_read_all()?.remove(key))
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.try_read_all()?.into_keys().collect())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut all = self.read_all();
        all.insert(key.to_string(), value.to_string());
        let contents = serde_json::to_vec_pretty(&all)?;
        write_atomic(&self.path, &contents)
    }
}

/// In-process preferences, nothing touches disk
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    slots: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.slots.borrow().keys().cloned().collect())
    }
}

/// In-memory preferences that accept a fixed number of writes, then fail
#[cfg(test)]
pub(crate) struct FailingPreferences {
    inner: MemoryPreferences,
    writes_left: std::cell::Cell<usize>,
}

#[cfg(test)]
impl FailingPreferences {
    pub(crate) fn new(writes: usize) -> Self {
        FailingPreferences {
            inner: MemoryPreferences::new(),
            writes_left: std::cell::Cell::new(writes),
        }
    }
}

#[cfg(test)]
impl Preferences for FailingPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let left = self.writes_left.get();
        if left == 0 {
            return Err(SoundboardError::Io(std::io::Error::other("disk full")));
        }
        self.writes_left.set(left - 1);
        self.inner.set(key, value)
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.inner.keys()
    }
}

/// Write using a best-effort atomic replace:
/// write to a temp file in the same directory, then rename into place.
///
/// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.soundboard-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("preferences.json"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;

    if cfg!(windows) && path.exists() {
        fs::remove_file(path)?;
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_preferences_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let prefs = FilePreferences::new(temp.path().join("prefs.json"));
        assert_eq!(prefs.get("sounds"), None);
    }

    #[test]
    fn test_file_preferences_set_and_get() {
        let temp = TempDir::new().unwrap();
        let prefs = FilePreferences::new(temp.path().join("prefs.json"));

        prefs.set("sounds", "[]").unwrap();
        prefs.set("other", "x").unwrap();

        let reopened = FilePreferences::new(temp.path().join("prefs.json"));
        assert_eq!(reopened.get("sounds").as_deref(), Some("[]"));
        assert_eq!(reopened.get("other").as_deref(), Some("x"));
    }

    #[test]
    fn test_file_preferences_corrupt_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();

        let prefs = FilePreferences::new(path);
        assert_eq!(prefs.get("sounds"), None);
        assert!(matches!(
            prefs.try_get("sounds"),
            Err(SoundboardError::CorruptStore(_))
        ));
        assert!(prefs.keys().is_err());

        // Writing replaces the corrupt file
        prefs.set("sounds", "[]").unwrap();
        assert_eq!(prefs.get("sounds").as_deref(), Some("[]"));
    }

    #[test]
    fn test_keys_lists_every_slot() {
        let temp = TempDir::new().unwrap();
        let prefs = FilePreferences::new(temp.path().join("prefs.json"));
        assert!(prefs.keys().unwrap().is_empty());
        assert_eq!(prefs.try_get("sounds").unwrap(), None);

        prefs.set("sounds", "[]").unwrap();
        prefs.set("archive", "[]").unwrap();
        assert_eq!(prefs.keys().unwrap(), vec!["archive", "sounds"]);
    }

    #[test]
    fn test_memory_preferences() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get("a"), None);
        prefs.set("a", "1").unwrap();
        prefs.set("a", "2").unwrap();
        assert_eq!(prefs.get("a").as_deref(), Some("2"));
    }

    #[test]
    fn test_write_atomic_overwrites_and_leaves_no_temp() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/out.bin");

        write_atomic(&path, b"one").unwrap();
        write_atomic(&path, b"two").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"two");
        let leftovers: Vec<_> = fs::read_dir(temp.path().join("nested"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
