//! ui-utils - small presentation helpers for front-end code
//!
//! Four independent helpers, each a self-contained transformation:
//!
//! - **Localized strings**: pick a display string from a plain value or a
//!   per-language mapping.
//! - **Scroll parents**: find the nearest ancestor whose overflow scrolls.
//! - **Durations**: format a time span as compact `1h30min` text.
//! - **Clock times**: split a locale-formatted time into its numeric part
//!   and its AM/PM marker.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`dom`] - Document tree queries and the scroll-parent walk
//! - [`error`] - Error types and result helpers
//! - [`text`] - Localized display text
//! - [`time`] - Duration and clock-time formatting
//! - [`utils`] - Config file locations
//!
//! # Example
//!
//! ```
//! use chrono::NaiveTime;
//! use ui_utils::text::{get_localized_string, LocalizedText, Translations};
//! use ui_utils::time::{format_minutes, time_am_pm, time_without_am_pm};
//!
//! let title: LocalizedText = Translations::new()
//!     .with("en", "Schedule")
//!     .with("fr", "Programme")
//!     .into();
//! assert_eq!(get_localized_string(Some(&title), Some("fr")), "Programme");
//!
//! assert_eq!(format_minutes(90), "1h30min");
//!
//! let time = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
//! assert_eq!(time_without_am_pm(&time, "en-US"), "2:05");
//! assert_eq!(time_am_pm(&time, "en-US").unwrap(), "PM");
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Document tree queries.
pub mod dom;

/// Error types and result helpers.
pub mod error;

/// Localized display text.
pub mod text;

/// Duration and clock-time formatting.
pub mod time;

/// Config file locations.
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use dom::{find_scroll_parent, Document, StyleTree};
pub use error::{Result, UiError};
pub use text::{get_localized_string, LocalizedText, Translations};
pub use time::{pretty_duration, time_am_pm, time_without_am_pm, HourCycle, TimeFormatter};
