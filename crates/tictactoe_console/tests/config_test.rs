//! Tests for loading console configuration.

use std::io::Write;
use tictactoe_console::ConsoleConfig;

#[test]
fn test_defaults() {
    let config = ConsoleConfig::default();
    assert_eq!(config.player_x(), &None);
    assert_eq!(config.player_o(), &None);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x = \"Ada\"\nlog_filter = \"debug\"").unwrap();

    let config = ConsoleConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_x().as_deref(), Some("Ada"));
    assert_eq!(config.player_o(), &None);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConsoleConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x = [").unwrap();

    let err = ConsoleConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_cli_values_override_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x = \"Ada\"\nplayer_o = \"Grace\"").unwrap();

    let config = ConsoleConfig::from_file(file.path())
        .unwrap()
        .apply_overrides(None, Some("Edsger".to_string()), Some("info".to_string()));
    assert_eq!(config.player_x().as_deref(), Some("Ada"));
    assert_eq!(config.player_o().as_deref(), Some("Edsger"));
    assert_eq!(config.log_filter(), "info");
}
