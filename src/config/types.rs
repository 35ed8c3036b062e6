//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::text::{resolve_language, LocalizedText};
use crate::time::{HourCycle, TimeFormatter, DEFAULT_LOCALE};
use crate::utils::global_config_file;

/// Localization settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizationConfig {
    /// Active language when none is given (default `en`).
    #[serde(default)]
    pub language: Option<String>,
}

/// Clock-time settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Locale for clock times (default `en-US`).
    #[serde(default)]
    pub locale: Option<String>,
    /// Override the locale's hour cycle.
    #[serde(default)]
    pub hour_cycle: Option<HourCycle>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Localization settings.
    #[serde(default)]
    pub localization: LocalizationConfig,
    /// Clock-time settings.
    #[serde(default)]
    pub time: TimeConfig,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        global_config_file()
    }

    /// Merge another config into this one (other takes precedence for set values).
    pub fn merge(&mut self, other: Config) {
        if other.localization.language.is_some() {
            self.localization.language = other.localization.language;
        }
        if other.time.locale.is_some() {
            self.time.locale = other.time.locale;
        }
        if other.time.hour_cycle.is_some() {
            self.time.hour_cycle = other.time.hour_cycle;
        }
    }

    /// Active language, `en` unless configured.
    pub fn language(&self) -> &str {
        resolve_language(self.localization.language.as_deref())
    }

    /// Clock locale, `en-US` unless configured.
    pub fn locale(&self) -> &str {
        match self.time.locale.as_deref() {
            Some(locale) if !locale.trim().is_empty() => locale,
            _ => DEFAULT_LOCALE,
        }
    }

    /// Resolve a localized value in the configured language.
    pub fn localize(&self, value: &LocalizedText) -> String {
        value.resolve(Some(self.language())).to_string()
    }

    /// Time formatter for `locale` (or the configured locale), with the
    /// configured hour cycle applied.
    pub fn time_formatter(&self, locale: Option<&str>) -> TimeFormatter {
        let formatter = TimeFormatter::new(locale.unwrap_or_else(|| self.locale()));
        match self.time.hour_cycle {
            Some(hour_cycle) => formatter.with_hour_cycle(hour_cycle),
            None => formatter,
        }
    }
}
