//! List and reorder sounds use case

use crate::domain::Sound;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SoundboardRepository};

/// All sounds in display order.
pub fn list_sounds(repository: &FileSystemRepository) -> Result<Vec<Sound>> {
    let config = repository.load_config()?;
    Ok(repository.store(&config).load())
}

/// Move the sound at `from` to position `to`.
pub fn move_sound(repository: &FileSystemRepository, from: usize, to: usize) -> Result<()> {
    let config = repository.load_config()?;
    repository.store(&config).move_sound(from, to)
}
