//! Tests for loading configuration files.

use std::io::Write;
use strictly_games::AppConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "human_first = true\niterations = 12\nseed = 99\nmissionaries = 2\ncannibals = 2"
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert!(*config.human_first());
    assert_eq!(*config.iterations(), 12);
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(*config.missionaries(), 2);
    assert_eq!(*config.scramble_moves(), 1000);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "iterations = \"many\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
