//! Integration tests for configuration loading and merging.

use ui_utils::config::{load_config, Config, LocalizationConfig, TimeConfig};
use ui_utils::time::HourCycle;

use crate::integration::fixtures::{create_workspace, create_workspace_with_config, uiu_in};

// ==================== Config Defaults ====================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.language(), "en");
    assert_eq!(config.locale(), "en-US");
    assert!(config.time.hour_cycle.is_none());
}

#[test]
fn test_config_new() {
    let config = Config::new();

    // Should be same as default
    assert!(config.localization.language.is_none());
    assert!(config.time.locale.is_none());
}

// ==================== Config Merging ====================

#[test]
fn test_config_merge_keeps_unset_values() {
    let mut base = Config {
        localization: LocalizationConfig {
            language: Some("fr".to_string()),
        },
        time: TimeConfig {
            locale: Some("fr-FR".to_string()),
            hour_cycle: Some(HourCycle::H23),
        },
    };

    let overlay = Config {
        time: TimeConfig {
            locale: Some("en-US".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    base.merge(overlay);

    // Overlay value should win
    assert_eq!(base.locale(), "en-US");
    // Values the overlay leaves unset survive
    assert_eq!(base.language(), "fr");
    assert_eq!(base.time.hour_cycle, Some(HourCycle::H23));
}

// ==================== Loading ====================

#[test]
fn test_load_project_config() {
    let dir = create_workspace_with_config(
        r#"
[localization]
language = "ja"

[time]
locale = "ja-JP"
hour_cycle = "h11"
"#,
    );

    let config = load_config(None, dir.path()).unwrap();

    assert_eq!(config.language(), "ja");
    assert_eq!(config.locale(), "ja-JP");
    assert_eq!(config.time.hour_cycle, Some(HourCycle::H11));
}

#[test]
fn test_config_hour_cycle_reaches_cli() {
    let dir = create_workspace_with_config("[time]\nlocale = \"de-DE\"\nhour_cycle = \"h12\"\n");

    uiu_in(&dir)
        .args(["time", "14:05", "--period"])
        .assert()
        .success()
        .stdout("PM\n");
}

#[test]
fn test_broken_project_config_warns() {
    let dir = create_workspace_with_config("[time\nlocale = ");

    uiu_in(&dir)
        .args(["time", "14:05"])
        .assert()
        .success()
        .stdout("2:05\n")
        .stderr(predicates::str::contains("Warning: Ignoring project config"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_is_lowest_priority() {
    use crate::integration::fixtures::{write_user_config, LOCAL_CONFIG};

    let dir = create_workspace();
    write_user_config(&dir, "[localization]\nlanguage = \"fr\"\n[time]\nlocale = \"de-DE\"\n");
    std::fs::write(dir.path().join(LOCAL_CONFIG), "[time]\nlocale = \"en-US\"\n").unwrap();

    uiu_in(&dir)
        .args(["localize", r#"{"en": "Hello", "fr": "Bonjour"}"#])
        .assert()
        .success()
        .stdout("Bonjour\n");

    uiu_in(&dir)
        .args(["time", "14:05"])
        .assert()
        .success()
        .stdout("2:05\n");
}
