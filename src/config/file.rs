//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::Config;
use crate::error::UiError;
use crate::utils::{local_config_file, LOCAL_CONFIG_NAME};

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Build the effective config from every layer that exists.
///
/// Layers, later ones winning per value:
/// 1. `~/.config/uiu/config.toml`
/// 2. `.uiurc.toml` in `project_dir`
/// 3. the `--config <path>` file
///
/// The first two are optional and skipped with a warning when unreadable.
///
/// # Errors
///
/// Returns [`UiError::InvalidConfig`] if the `--config` file cannot be read
/// or parsed.
pub fn load_config(cli_config_path: Option<&Path>, project_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    let user = Config::user_config_path().filter(|path| path.exists());
    merge_optional(&mut config, "user", user.as_deref());
    merge_optional(&mut config, "project", local_config_file(project_dir).as_deref());

    if let Some(path) = cli_config_path {
        let explicit = load_config_from_path(path).map_err(|e| UiError::InvalidConfig {
            path: path.to_path_buf(),
            message: format!("{e:#}"),
        })?;
        config.merge(explicit);
    }

    Ok(config)
}

fn merge_optional(config: &mut Config, layer: &str, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    match load_config_from_path(path) {
        Ok(found) => config.merge(found),
        Err(e) => eprintln!(
            "Warning: Ignoring {layer} config at {}: {e:#}",
            path.display()
        ),
    }
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    format!(
        r#"# uiu Configuration File
# Place this file at ~/.config/uiu/config.toml for global settings
# or {LOCAL_CONFIG_NAME} in your working directory for project-specific settings

# Localization settings
[localization]
# Language used to pick from per-language values when --lang is not given.
# Falls back to "en" when unset or empty.
language = "en"

# Clock-time settings
[time]
# Locale used by `uiu time` when --locale is not given (BCP 47, e.g. "de-DE").
locale = "en-US"

# Force an hour cycle regardless of locale: "h11", "h12", "h23", "h24"
# hour_cycle = "h23"
"#
    )
}
