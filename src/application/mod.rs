//! Application layer - Use cases and orchestration

pub mod add_sound;
pub mod edit_sound;
pub mod export;
pub mod import;
pub mod init;
pub mod list_sounds;
pub mod manage_config;
pub mod play_sound;
pub mod prune;
pub mod remove_sound;

pub use add_sound::{AddSoundService, NewSound};
pub use edit_sound::{EditSoundService, SoundEdit};
pub use export::{ExportService, ExportSummary};
pub use import::{ImportService, ImportSummary};
pub use manage_config::ConfigService;
pub use play_sound::PlaySoundService;
pub use prune::PruneService;
pub use remove_sound::{RemoveSoundService, RemovedSound};
