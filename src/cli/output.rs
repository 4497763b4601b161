//! Output formatting utilities

use crate::application::ImportSummary;
use crate::domain::Sound;
use std::path::PathBuf;

/// Format sounds for display, numbered from 1
pub fn format_sound_list(sounds: &[Sound]) -> String {
    if sounds.is_empty() {
        return "No sounds yet".to_string();
    }

    let mut output = String::new();
    for (i, sound) in sounds.iter().enumerate() {
        let label = if sound.label.is_empty() {
            "(image)"
        } else {
            sound.label.as_str()
        };
        let colour = sound
            .colour
            .map(|c| c.to_hex())
            .unwrap_or_else(|| "-".to_string());
        let image = if sound.image.is_some() { "  [image]" } else { "" };

        output.push_str(&format!(
            "{:>3}. {:<20} {:<10} {}{}\n",
            i + 1,
            label,
            colour,
            sound.file_name(),
            image
        ));
    }
    output
}

/// Confirmation message for a finished import
pub fn format_import_summary(summary: &ImportSummary) -> String {
    match summary.imported {
        0 => "Bundle contained no sounds".to_string(),
        1 => "Imported 1 sound".to_string(),
        n => format!("Imported {} sounds", n),
    }
}

/// Report of orphaned audio files
pub fn format_orphans(orphans: &[PathBuf], deleted: bool) -> String {
    if orphans.is_empty() {
        return "No orphaned audio files".to_string();
    }

    let verb = if deleted { "Deleted" } else { "Orphaned" };
    let mut output = String::new();
    for path in orphans {
        output.push_str(&format!("{}: {}\n", verb, path.display()));
    }
    output
}
