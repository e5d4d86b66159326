use std::fs;

use sysdash::commands::export::export_log;
use sysdash::core::log_view::{export_to, EXPORT_FILE_NAME};
use sysdash::core::LogView;
use tempfile::TempDir;

const LOG: &str = "Timestamp,CPU,Memory,Disk,Ping_Status,Ping_ms\r\n\
                   2025-10-01 12:00:00,15.2,40.1,58.9,UP,22.5\r\n\
                   2025-10-01 12:00:10,18.3,42.0,59.1,DOWN,-1\r\n";

#[test]
fn test_export_log_copies_source_exactly() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("log.csv");
    let output = dir.path().join("out").join(EXPORT_FILE_NAME);
    fs::write(&source, LOG).unwrap();

    let count = export_log(&source, &output).unwrap();
    assert_eq!(count, Some(2));
    assert_eq!(fs::read(&output).unwrap(), LOG.as_bytes());
}

#[test]
fn test_export_log_absent_source_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(EXPORT_FILE_NAME);

    let count = export_log(&dir.path().join("missing.csv"), &output).unwrap();
    assert!(count.is_none());
    assert!(!output.exists());
}

#[test]
fn test_export_log_propagates_parse_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("log.csv");
    fs::write(&source, "Timestamp,CPU\n").unwrap();

    let err = export_log(&source, &dir.path().join("out.csv")).unwrap_err();
    assert!(format!("{:#}", err).contains("Missing required column"));
}

#[test]
fn test_export_to_uses_default_name() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("log.csv");
    fs::write(&source, LOG).unwrap();

    let table = LogView::new(&source).load().unwrap().unwrap();
    let path = export_to(&table, dir.path(), EXPORT_FILE_NAME).unwrap();

    assert_eq!(path.file_name().unwrap(), "system_log_export.csv");
    assert_eq!(fs::read_to_string(path).unwrap(), LOG);
}
