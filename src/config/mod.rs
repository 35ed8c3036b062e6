//! Configuration module for uiu.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - Project-level `.uiurc.toml`
//! - User-level `~/.config/uiu/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config};
pub use types::{Config, LocalizationConfig, TimeConfig};
