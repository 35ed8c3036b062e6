//! uiu - UI utilities
//!
//! Entry point for the uiu CLI application.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use ui_utils::cli::{parse_clock_time, parse_instant, Cli, Command};
use ui_utils::config::{generate_example_config, load_config, Config};
use ui_utils::error::{exit_code, UiError};
use ui_utils::text::LocalizedText;
use ui_utils::time::{format_minutes, pretty_duration};
use ui_utils::utils::{global_config_file, local_config_file, LOCAL_CONFIG_NAME};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Check if it's one of our custom errors with good formatting
            if let Some(ui_err) = err.downcast_ref::<UiError>() {
                eprintln!("Error: {ui_err}");
                return ExitCode::from(ui_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.debug {
        print_debug_header();
        eprintln!("Debug: CLI arguments = {cli:#?}");
    }

    let working_dir = Cli::working_dir();
    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref(), &working_dir)?
    };

    if cli.debug {
        print_debug_paths(&working_dir);
        eprintln!("Debug: Config = {config:#?}");
    }

    let Some(command) = cli.command else {
        return Ok(exit_code::SUCCESS);
    };

    match command {
        Command::Localize { value, lang } => {
            let text = LocalizedText::parse_lenient(&value)?;
            let language = lang.as_deref().unwrap_or_else(|| config.language());
            if cli.debug {
                eprintln!("Debug: Active language = {language:?}");
                eprintln!("Debug: Parsed value = {text:?}");
            }
            println!("{}", text.resolve(Some(language)));
        }
        Command::Duration {
            start,
            end,
            minutes,
        } => {
            let pretty = match (minutes, start, end) {
                (Some(minutes), _, _) => format_minutes(minutes),
                (None, Some(start), Some(end)) => {
                    let start = parse_instant(&start)?;
                    let end = parse_instant(&end)?;
                    if cli.debug {
                        eprintln!("Debug: Span = {start} .. {end}");
                    }
                    pretty_duration(&start, &end)?
                }
                _ => anyhow::bail!("Both START and END are required unless --minutes is given"),
            };
            println!("{pretty}");
        }
        Command::Time {
            time,
            locale,
            period,
            parts,
            hour_cycle,
        } => {
            let time = parse_clock_time(&time)?;
            let mut formatter = config.time_formatter(locale.as_deref());
            if let Some(cycle) = hour_cycle {
                formatter = formatter.with_hour_cycle(cycle.into());
            }
            if cli.debug {
                eprintln!(
                    "Debug: Locale = {} (hour cycle {})",
                    formatter.locale(),
                    formatter.hour_cycle()
                );
            }

            if parts {
                let json = serde_json::to_string_pretty(&formatter.format_to_parts(&time))
                    .context("Failed to serialize time parts")?;
                println!("{json}");
            } else if period {
                println!("{}", formatter.day_period(&time)?);
            } else {
                println!("{}", formatter.format_without_day_period(&time));
            }
        }
        Command::Config => {
            print!("{}", generate_example_config());
        }
    }

    Ok(exit_code::SUCCESS)
}

// ==================== Debug Functions ====================

/// Print debug header with version info.
fn print_debug_header() {
    eprintln!("=== uiu debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

/// Print debug information about config file locations.
fn print_debug_paths(working_dir: &Path) {
    eprintln!("Debug: File locations:");

    if let Some(cfg) = global_config_file() {
        let exists = cfg.exists();
        eprintln!("  Global config: {} (exists: {})", cfg.display(), exists);
    } else {
        eprintln!("  Global config: <not available>");
    }

    if let Some(cfg) = local_config_file(working_dir) {
        eprintln!("  Local config: {} (exists: true)", cfg.display());
    } else {
        eprintln!(
            "  Local config: {}/{} (exists: false)",
            working_dir.display(),
            LOCAL_CONFIG_NAME
        );
    }

    eprintln!();
}
