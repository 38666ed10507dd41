//! Tests for loading the TOML config file.

use rewind_tui::TuiConfig;
use std::io::Write;
use std::path::PathBuf;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
board_size = 4
log_file = "/tmp/rewind-test.log"
log_filter = "rewind_tictactoe=debug"
"#,
    );

    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.board_size().side(), 4);
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind-test.log"));
    assert_eq!(config.log_filter(), "rewind_tictactoe=debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TuiConfig::load(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("board_size = ");
    let err = TuiConfig::load(file.path()).expect_err("malformed toml");
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_oversized_board_rejected() {
    let file = write_config("board_size = 40");
    assert!(TuiConfig::from_file(file.path()).is_err());
}

#[test]
fn test_cli_override_beats_file() {
    let file = write_config("board_size = 4");
    let config = TuiConfig::load(file.path())
        .and_then(|c| c.with_overrides(Some(3), None))
        .expect("valid config");
    assert_eq!(config.board_size().side(), 3);
}
