//! Infrastructure layer - External I/O and persistence

pub mod assets;
pub mod config;
pub mod player;
pub mod preferences;
pub mod repository;
pub mod selector;
pub mod store;

pub use assets::SoundFileRepository;
pub use config::Config;
pub use player::PlayerSession;
pub use preferences::{FilePreferences, MemoryPreferences, Preferences};
pub use repository::{FileSystemRepository, SoundboardRepository};
pub use selector::{ArgumentSelector, FileSelection, FileSelector};
pub use store::SoundStore;
