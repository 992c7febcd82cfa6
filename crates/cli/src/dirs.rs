//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific save directory for stored characters
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/tactics/characters`
/// - Linux: `~/.local/share/tactics/characters` (or `$XDG_DATA_HOME/tactics/characters`)
/// - Windows: `%APPDATA%\tactics\characters`
/// - Fallback: `./save_data/characters`
pub fn save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tactics")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("characters")
}
