//! Custom error types for ui-utils.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for uiu.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Input could not be parsed.
    pub const INVALID_INPUT: i32 = 2;
    /// The locale has no day period for the requested time.
    pub const MISSING_DAY_PERIOD: i32 = 3;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
}

/// Main error type for ui-utils.
#[derive(Error, Debug)]
pub enum UiError {
    /// Formatting produced no day-period part.
    #[error("Locale '{locale}' formats times without a day period (AM/PM)\n\nTip: Only ask for the day period with 12-hour locales, or force one with a '-u-hc-h12' locale extension.")]
    MissingDayPeriod { locale: String },

    /// Span end lies before its start.
    #[error("Duration ends {minutes} minutes before it starts")]
    NegativeDuration { minutes: u64 },

    /// Timestamp could not be parsed.
    #[error("Invalid time '{input}': {message}")]
    InvalidTimestamp { input: String, message: String },

    /// JSON is neither a string nor a language-to-string object.
    #[error("Invalid localized value: {0}")]
    InvalidLocalizedValue(#[from] serde_json::Error),

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl UiError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            UiError::MissingDayPeriod { .. } => exit_code::MISSING_DAY_PERIOD,
            UiError::NegativeDuration { .. } => exit_code::INVALID_INPUT,
            UiError::InvalidTimestamp { .. } => exit_code::INVALID_INPUT,
            UiError::InvalidLocalizedValue(_) => exit_code::INVALID_INPUT,
            UiError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            UiError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Create an invalid timestamp error.
    pub fn invalid_timestamp(input: &str, message: impl ToString) -> Self {
        UiError::InvalidTimestamp {
            input: input.to_string(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for ui-utils operations.
pub type Result<T> = std::result::Result<T, UiError>;
