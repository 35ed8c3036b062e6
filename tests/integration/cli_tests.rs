//! CLI integration tests for uiu.
//!
//! These tests verify the command-line interface behavior using assert_cmd.

use predicates::prelude::*;

use crate::integration::fixtures::{
    create_workspace, create_workspace_with_config, greeting_json, uiu_in,
};

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    let dir = create_workspace();
    uiu_in(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Format localized strings, durations and clock times",
        ))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("localize"))
        .stdout(predicate::str::contains("duration"))
        .stdout(predicate::str::contains("time"));
}

#[test]
fn test_version_output() {
    let dir = create_workspace();
    uiu_in(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("uiu"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

#[test]
fn test_no_arguments_shows_help() {
    let dir = create_workspace();
    uiu_in(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_completions() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uiu"));
}

// ==================== Localize ====================

#[test]
fn test_localize_plain_text() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["localize", "hi"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn test_localize_json_string() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["localize", r#""quoted""#])
        .assert()
        .success()
        .stdout("quoted\n");
}

#[test]
fn test_localize_picks_language() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["localize", greeting_json(), "--lang", "fr"])
        .assert()
        .success()
        .stdout("Bonjour\n");

    uiu_in(&dir)
        .args(["localize", greeting_json()])
        .assert()
        .success()
        .stdout("Hello\n");
}

#[test]
fn test_localize_first_value_fallback() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args([
            "localize",
            r#"{"fr": "Bonjour", "es": "Hola"}"#,
            "--lang",
            "de",
        ])
        .assert()
        .success()
        .stdout("Bonjour\n");
}

#[test]
fn test_localize_empty_value() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["localize", ""])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_localize_null_value() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["localize", "null"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_localize_invalid_json() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["localize", r#"{"en": 3}"#])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid localized value"));
}

#[test]
fn test_localize_uses_config_language() {
    let dir = create_workspace_with_config("[localization]\nlanguage = \"fr\"\n");
    uiu_in(&dir)
        .args(["localize", greeting_json()])
        .assert()
        .success()
        .stdout("Bonjour\n");

    // --lang wins over config
    uiu_in(&dir)
        .args(["localize", greeting_json(), "--lang", "en"])
        .assert()
        .success()
        .stdout("Hello\n");

    // --no-config ignores it
    uiu_in(&dir)
        .args(["localize", greeting_json(), "--no-config"])
        .assert()
        .success()
        .stdout("Hello\n");
}

// ==================== Duration ====================

#[test]
fn test_duration_between_instants() {
    let dir = create_workspace();
    let cases = [
        ("2024-03-01T09:45:00Z", "45min"),
        ("2024-03-01T10:00:00Z", "60min"),
        ("2024-03-01T10:30:00Z", "1h30min"),
        ("2024-03-01T11:00:00Z", "2h"),
    ];

    for (end, expected) in cases {
        uiu_in(&dir)
            .args(["duration", "2024-03-01T09:00:00Z", end])
            .assert()
            .success()
            .stdout(format!("{expected}\n"));
    }
}

#[test]
fn test_duration_across_offsets() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["duration", "2024-03-01T09:00:00Z", "2024-03-01T12:15:00+02:00"])
        .assert()
        .success()
        .stdout("1h15min\n");
}

#[test]
fn test_duration_minutes_flag() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["duration", "--minutes", "61"])
        .assert()
        .success()
        .stdout("1h1min\n");
}

#[test]
fn test_duration_negative_span() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["duration", "2024-03-01T10:00:00Z", "2024-03-01T09:00:00Z"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("60 minutes before it starts"));
}

#[test]
fn test_duration_invalid_instant() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["duration", "yesterday", "2024-03-01T09:00:00Z"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid time 'yesterday'"));
}

// ==================== Time ====================

#[test]
fn test_time_without_period() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["time", "14:05", "--locale", "en-US"])
        .assert()
        .success()
        .stdout("2:05\n");
}

#[test]
fn test_time_period_only() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["time", "14:05", "--locale", "en-US", "--period"])
        .assert()
        .success()
        .stdout("PM\n");
}

#[test]
fn test_time_period_missing_for_24_hour_locale() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["time", "14:05", "--locale", "de-DE", "--period"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("without a day period"));
}

#[test]
fn test_time_hour_cycle_flag() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["time", "14:05", "--locale", "en-US", "--hour-cycle", "h23"])
        .assert()
        .success()
        .stdout("14:05\n");

    uiu_in(&dir)
        .args([
            "time",
            "14:05",
            "--locale",
            "de-DE",
            "--hour-cycle",
            "h12",
            "--period",
        ])
        .assert()
        .success()
        .stdout("PM\n");
}

#[test]
fn test_time_from_rfc3339() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["time", "2024-03-01T09:30:00+01:00", "--period"])
        .assert()
        .success()
        .stdout("AM\n");
}

#[test]
fn test_time_uses_config_locale() {
    let dir = create_workspace_with_config("[time]\nlocale = \"de-DE\"\n");
    uiu_in(&dir)
        .args(["time", "09:05"])
        .assert()
        .success()
        .stdout("09:05\n");
}

#[test]
fn test_time_invalid_input() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["time", "noonish"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected HH:MM"));
}

#[test]
fn test_time_parts_json() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["time", "14:05", "--parts"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "dayPeriod""#))
        .stdout(predicate::str::contains(r#""value": "PM""#));
}

#[test]
fn test_time_regional_conventions() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["time", "14:05", "--locale", "es-US", "--period"])
        .assert()
        .success()
        .stdout("p.m.\n");

    uiu_in(&dir)
        .args(["time", "14:05", "--locale", "ca-ES", "--period"])
        .assert()
        .code(3);

    uiu_in(&dir)
        .args(["time", "14:05", "--locale", "fr-CA"])
        .assert()
        .success()
        .stdout("14 h 05\n");
}

// ==================== Config ====================

#[test]
fn test_config_example() {
    let dir = create_workspace();
    uiu_in(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[localization]"))
        .stdout(predicate::str::contains("[time]"));
}

#[test]
fn test_missing_config_file() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["--config", "nope.toml", "time", "14:05"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_debug_output() {
    let dir = create_workspace();
    uiu_in(&dir)
        .args(["time", "14:05", "--debug"])
        .assert()
        .success()
        .stdout("2:05\n")
        .stderr(predicate::str::contains("uiu debug mode"))
        .stderr(predicate::str::contains("Debug: Locale = en-US (hour cycle h12)"));
}
