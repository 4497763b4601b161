//! Persistent sound list

use crate::domain::Sound;
use crate::error::{Result, SoundboardError};
use crate::infrastructure::preferences::Preferences;
use tracing::{debug, warn};

/// Ordered list of sounds persisted under one preference key.
///
/// Every mutator reads the whole list, applies the change and writes the
/// whole list back; there is no separate save step.
#[derive(Debug)]
pub struct SoundStore<P: Preferences> {
    preferences: P,
    key: String,
}

impl<P: Preferences> SoundStore<P> {
    pub fn new(preferences: P, key: impl Into<String>) -> Self {
        SoundStore {
            preferences,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the list. A missing or undecodable slot reads as empty.
    pub fn load(&self) -> Vec<Sound> {
        self.try_load().unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "stored sounds are corrupt, starting empty");
            Vec::new()
        })
    }

    /// Read the list, failing with [`SoundboardError::CorruptStore`] when the
    /// slot exists but cannot be decoded. A missing slot is empty.
    pub fn try_load(&self) -> Result<Vec<Sound>> {
        let Some(blob) = self.preferences.try_get(&self.key)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&blob)
            .map_err(|e| SoundboardError::CorruptStore(format!("slot '{}': {}", self.key, e)))
    }

    /// Replace the whole list
    pub fn save(&self, sounds: &[Sound]) -> Result<()> {
        let blob = serde_json::to_string(sounds)?;
        self.preferences.set(&self.key, &blob)?;
        debug!(key = %self.key, count = sounds.len(), "saved sounds");
        Ok(())
    }

    pub fn append(&self, sound: Sound) -> Result<()> {
        let mut sounds = self.load();
        sounds.push(sound);
        self.save(&sounds)
    }

    pub fn replace(&self, index: usize, sound: Sound) -> Result<Sound> {
        let mut sounds = self.load();
        check_index(index, sounds.len())?;
        let previous = std::mem::replace(&mut sounds[index], sound);
        self.save(&sounds)?;
        Ok(previous)
    }

    pub fn remove(&self, index: usize) -> Result<Sound> {
        let mut sounds = self.load();
        check_index(index, sounds.len())?;
        let removed = sounds.remove(index);
        self.save(&sounds)?;
        Ok(removed)
    }

    /// Move the sound at `from` so it ends up at position `to`
    pub fn move_sound(&self, from: usize, to: usize) -> Result<()> {
        let mut sounds = self.load();
        check_index(from, sounds.len())?;
        check_index(to, sounds.len())?;
        if from == to {
            return Ok(());
        }
        let sound = sounds.remove(from);
        sounds.insert(to, sound);
        self.save(&sounds)
    }

    pub fn get(&self, index: usize) -> Result<Sound> {
        let mut sounds = self.load();
        check_index(index, sounds.len())?;
        Ok(sounds.swap_remove(index))
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(SoundboardError::InvalidIndex { index, len });
    }
    Ok(())
}
