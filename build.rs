//! Build script for uiu.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "uiu")]
#[command(
    author,
    version,
    about = "Format localized strings, durations and clock times"
)]
#[command(
    long_about = "uiu exposes small presentation helpers on the command line: \
    resolving per-language strings, formatting time spans as compact text such as 1h30min, \
    and splitting locale-formatted clock times into their numeric part and AM/PM marker.\n\n\
    Defaults for the language and locale come from ~/.config/uiu/config.toml or a \
    .uiurc.toml file in the working directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    no_config: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Subcommand)]
enum Command {
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
        hour_cycle: Option<HourCycle>,
    },

    /// Print an example config file
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum HourCycle {
    H11,
    H12,
    H23,
    H24,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("UIU_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .expect("Failed to generate man page");

    let man_path = out_dir.join("uiu.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    // Also copy to docs directory for distribution
    let docs_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap()).join("docs");
    if docs_dir.exists() {
        let _ = fs::copy(&man_path, docs_dir.join("uiu.1"));
    }

    println!("cargo:rerun-if-changed=build.rs");
}
