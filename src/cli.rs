//! CLI argument definitions for uiu.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use ui_utils::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Debug: {}", cli.debug);
//! ```

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveTime};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::error::{Result, UiError};
use crate::time::HourCycle;

/// Format localized strings, durations and clock times.
#[derive(Parser, Debug)]
#[command(name = "uiu")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a plain string or a JSON language map to one string
    Localize {
        /// A JSON string or object ({"en": "...", "fr": "..."}), or plain text
        #[arg(value_name = "VALUE")]
        value: String,

        /// Active language (default: config or "en")
        #[arg(short, long, value_name = "CODE")]
        lang: Option<String>,
    },

    /// Format the span between two RFC 3339 instants, e.g. "1h30min"
    Duration {
        /// Start instant
        #[arg(value_name = "START", required_unless_present = "minutes")]
        start: Option<String>,

        /// End instant
        #[arg(value_name = "END", required_unless_present = "minutes")]
        end: Option<String>,

        /// Format a minute count instead of two instants
        #[arg(short, long, value_name = "N", conflicts_with_all = ["start", "end"])]
        minutes: Option<u64>,
    },

    /// Format a clock time (HH:MM, HH:MM:SS or RFC 3339) without its AM/PM marker
    Time {
        /// Time to format
        #[arg(value_name = "TIME")]
        time: String,

        /// Locale (default: config or "en-US")
        #[arg(short, long, value_name = "LOCALE")]
        locale: Option<String>,

        /// Print only the day period (AM/PM) instead
        #[arg(short, long, conflicts_with = "parts")]
        period: bool,

        /// Print all formatted parts as JSON
        #[arg(long)]
        parts: bool,

        /// Override the hour cycle
        #[arg(long, value_name = "CYCLE", value_enum)]
        hour_cycle: Option<CliHourCycle>,
    },

    /// Print an example config file
    Config,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

/// Hour cycle for CLI parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliHourCycle {
    /// 0-11 with AM/PM
    H11,
    /// 1-12 with AM/PM
    H12,
    /// 0-23
    H23,
    /// 1-24
    H24,
}

impl From<CliHourCycle> for HourCycle {
    fn from(cycle: CliHourCycle) -> Self {
        match cycle {
            CliHourCycle::H11 => HourCycle::H11,
            CliHourCycle::H12 => HourCycle::H12,
            CliHourCycle::H23 => HourCycle::H23,
            CliHourCycle::H24 => HourCycle::H24,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Directory searched for the project config.
    pub fn working_dir() -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "uiu", &mut std::io::stdout());
    }
}

/// Parse an RFC 3339 instant such as `2024-03-01T09:00:00Z`.
///
/// # Errors
///
/// Returns [`UiError::InvalidTimestamp`] if the input is not RFC 3339.
pub fn parse_instant(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input.trim()).map_err(|e| UiError::invalid_timestamp(input, e))
}

/// Parse a wall-clock time: `HH:MM`, `HH:MM:SS`, or the local time of an
/// RFC 3339 instant.
///
/// # Errors
///
/// Returns [`UiError::InvalidTimestamp`] if none of the forms match.
pub fn parse_clock_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.time()))
        .map_err(|_| UiError::invalid_timestamp(input, "expected HH:MM, HH:MM:SS or RFC 3339"))
}
