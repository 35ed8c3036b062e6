//! Test fixtures for integration tests.
//!
//! Every command runs in its own temporary directory, with `HOME` and
//! `XDG_CONFIG_HOME` pointing inside it so a developer's own config never
//! leaks into the results.

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

/// File name of the project-level config.
pub const LOCAL_CONFIG: &str = ".uiurc.toml";

/// Create an empty working directory.
pub fn create_workspace() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a working directory with a project-level config.
pub fn create_workspace_with_config(config: &str) -> TempDir {
    let dir = create_workspace();
    fs::write(dir.path().join(LOCAL_CONFIG), config).expect("Failed to write config");
    dir
}

/// Write a user-level config inside the isolated config home.
pub fn write_user_config(dir: &TempDir, config: &str) {
    let config_dir = dir.path().join("config-home").join("uiu");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    fs::write(config_dir.join("config.toml"), config).expect("Failed to write user config");
}

/// A uiu command running inside `dir`.
pub fn uiu_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("uiu").expect("Failed to find uiu binary");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config-home"));
    cmd
}

/// Example localized value used across tests.
pub fn greeting_json() -> &'static str {
    r#"{"en": "Hello", "fr": "Bonjour"}"#
}
