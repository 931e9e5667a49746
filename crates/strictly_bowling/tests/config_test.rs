//! Tests for loading game configuration from disk.

mod common;

use common::init_tracing;
use std::io::Write;
use strictly_bowling::{Game, GameConfig};

#[test]
fn test_load_config_from_file() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "frame_limit = 10").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::ten_frames());

    let mut game = Game::with_config(config);
    assert!(game.roll(11, 1).is_err());
}

#[test]
fn test_missing_file_is_config_error() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_config_error() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "frame_limit = [").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
