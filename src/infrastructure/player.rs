//! External audio player integration

use crate::error::{Result, SoundboardError};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Plays audio files by handing them to an external player command
pub struct PlayerSession {
    command: String,
}

impl PlayerSession {
    /// Create a new player session with the given command
    pub fn new(player_command: String) -> Self {
        PlayerSession {
            command: player_command,
        }
    }

    /// Start playing a file and return immediately
    pub fn play(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command()?;
        args.push(file_path.to_string_lossy().to_string());

        debug!(program = %program, file = %file_path.display(), "launching player");

        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program).args(&args);
            cmd.spawn().map_err(|e| {
                SoundboardError::Player(format!("Failed to launch player '{}': {}", program, e))
            })?;
        }

        #[cfg(not(windows))]
        {
            Command::new(&program).args(&args).spawn().map_err(|e| {
                SoundboardError::Player(format!("Failed to launch player '{}': {}", program, e))
            })?;
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> Result<(String, Vec<String>)> {
        let mut parts = self.command.split_whitespace();

        let program = parts
            .next()
            .ok_or_else(|| SoundboardError::Player("No player command configured".to_string()))?
            .to_string();
        let args = parts.map(|s| s.to_string()).collect();

        Ok((program, args))
    }
}
