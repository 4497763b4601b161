use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn soundboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("soundboard").unwrap();
    cmd.env_remove("SOUNDBOARD_ROOT");
    cmd.env_remove("SOUNDBOARD_PLAYER");
    cmd.env_remove("SOUNDBOARD_LOG");
    cmd
}

/// Write a fake audio file outside the soundboard and return its path
pub fn write_audio(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Files currently in a soundboard's asset directory
pub fn asset_files(root: &Path) -> Vec<PathBuf> {
    let dir = root.join("sounds");
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files
}
