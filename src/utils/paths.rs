//! Path utilities.

use std::path::{Path, PathBuf};

/// File name of the project-level config.
pub const LOCAL_CONFIG_NAME: &str = ".uiurc.toml";

/// Get the config directory for uiu.
///
/// Returns `~/.config/uiu` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("uiu"))
}

/// Get the global config file path.
///
/// Returns `~/.config/uiu/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find local config file in project directory.
///
/// Looks for `.uiurc.toml` in the given directory.
pub fn local_config_file(project_dir: &Path) -> Option<PathBuf> {
    let config_file = project_dir.join(LOCAL_CONFIG_NAME);
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}
