use std::fs;
use std::path::PathBuf;

use sysdash::core::config::{DEFAULT_REFRESH_MS, MIN_REFRESH_MS};
use sysdash::core::Config;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.log_path.is_none());
    assert_eq!(config.resolve_source(None), PathBuf::from("log.csv"));
    assert_eq!(config.resolve_refresh_ms(None), DEFAULT_REFRESH_MS);
}

#[test]
fn test_config_load_nonexistent_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sysdash").join("config.json");

    let mut config = Config::default();
    config.set_log_path("/data/log.csv".to_string());
    config.set_refresh_ms(5000);
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.resolve_source(None), PathBuf::from("/data/log.csv"));
    assert_eq!(loaded.resolve_refresh_ms(None), 5000);
}

#[test]
fn test_config_corrupt_file_falls_back_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "refresh_ms": 100 }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.log_path.is_none());
    assert_eq!(config.resolve_refresh_ms(None), MIN_REFRESH_MS);
    assert_eq!(config.export_file_name(), "system_log_export.csv");
}
