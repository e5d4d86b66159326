use std::fs;

use sysdash::core::log_view::{serialize, RowCategory, SeriesView, RECENT_WINDOW};
use sysdash::core::LogView;
use sysdash::DashError;
use tempfile::TempDir;

const HEADER: &str = "Timestamp,CPU,Memory,Disk,Ping_Status,Ping_ms";

fn write_log(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let mut text = format!("{}\n", HEADER);
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    let path = dir.path().join("log.csv");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_missing_source_is_absent() {
    let dir = TempDir::new().unwrap();
    let view = LogView::new(dir.path().join("log.csv"));

    assert!(view.load().unwrap().is_none());
    assert!(view.load_dashboard().unwrap().is_none());
}

#[test]
fn test_directory_source_is_absent() {
    // Reading a directory fails with an IO error other than NotFound
    let dir = TempDir::new().unwrap();
    let view = LogView::new(dir.path());

    assert!(view.load().unwrap().is_none());
}

#[test]
fn test_header_only_degrades_gracefully() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, &[]);

    let (table, dashboard) = LogView::new(path).load_dashboard().unwrap().unwrap();
    assert!(table.is_empty());
    assert!(dashboard.summary.is_none());
    assert!(dashboard.recent.is_empty());
    assert_eq!(dashboard.utilization, SeriesView::NoData);
    assert_eq!(dashboard.connectivity, SeriesView::NoData);
    assert_eq!(dashboard.latency, SeriesView::NoData);
}

#[test]
fn test_round_trip_is_byte_exact() {
    let dir = TempDir::new().unwrap();
    let text = "Timestamp,CPU,Memory,Disk,Ping_Status,Ping_ms\n\
                2025-10-01 12:00:00,15.2,40.1,58.9,UP,22.5\n\
                2025-10-01 12:00:10,18.30,42.0,59.1,DOWN,-1\n\
                2025-10-01 12:00:20,1e1,042.5,59.123456,UP,0.0\n";
    let path = dir.path().join("log.csv");
    fs::write(&path, text).unwrap();

    let table = LogView::new(&path).load().unwrap().unwrap();
    assert_eq!(serialize(&table), text.as_bytes());
}

#[test]
fn test_full_dashboard_views() {
    let dir = TempDir::new().unwrap();
    let path = write_log(
        &dir,
        &[
            "2025-10-01 12:00:00,10.0,40.0,58.0,UP,22.5",
            "2025-10-01 12:00:10,11.0,41.0,58.1,DOWN,-1",
            "2025-10-01 12:00:20,12.0,42.0,58.2,DOWN,0",
            "2025-10-01 12:00:30,13.0,43.0,58.3,UP,18.0",
            "2025-10-01 12:00:40,14.0,44.0,58.4,UP,19.5",
            "2025-10-01 12:00:50,15.249,45.0,58.5,UP,21.0",
        ],
    );

    let (_, dashboard) = LogView::new(path).load_dashboard().unwrap().unwrap();

    let summary = dashboard.summary.as_ref().unwrap();
    assert_eq!(summary.cpu, "15.2%");
    assert_eq!(summary.ping, "✅ UP");

    assert_eq!(dashboard.recent.len(), RECENT_WINDOW);
    assert_eq!(dashboard.recent[0].sample.timestamp, "2025-10-01 12:00:10");
    assert_eq!(dashboard.recent[0].category, RowCategory::NotUp);
    assert_eq!(dashboard.recent[4].category, RowCategory::Up);

    assert_eq!(dashboard.utilization.points().len(), 6);

    let ups: Vec<u8> = dashboard.connectivity.points().iter().map(|p| p.up).collect();
    assert_eq!(ups, [1, 0, 0, 1, 1, 1]);

    let latencies: Vec<f64> = dashboard.latency.points().iter().map(|p| p.latency_ms).collect();
    assert_eq!(latencies, [22.5, 18.0, 19.5, 21.0]);

    assert_eq!(dashboard.total_records, 6);
    assert_eq!(dashboard.span.unwrap().duration().num_seconds(), 50);
}

#[test]
fn test_malformed_row_fails_whole_load() {
    let dir = TempDir::new().unwrap();
    let path = write_log(
        &dir,
        &[
            "2025-10-01 12:00:00,10.0,40.0,58.0,UP,22.5",
            "2025-10-01 12:00:10,n/a,41.0,58.1,DOWN,-1",
        ],
    );

    match LogView::new(path).load() {
        Err(DashError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_column_fails_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.csv");
    fs::write(&path, "Timestamp,CPU,Memory,Disk,Ping_ms\n").unwrap();

    assert!(matches!(
        LogView::new(path).load(),
        Err(DashError::MissingColumn(name)) if name == "Ping_Status"
    ));
}

#[test]
fn test_dashboard_json_shape() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, &["2025-10-01 12:00:00,10.0,40.0,58.0,DOWN,-1"]);

    let (_, dashboard) = LogView::new(path).load_dashboard().unwrap().unwrap();
    let json = serde_json::to_value(&dashboard).unwrap();

    assert_eq!(json["summary"]["ping"], "❌ DOWN");
    assert_eq!(json["latency"]["state"], "no_data");
    assert_eq!(json["connectivity"]["state"], "data");
    assert_eq!(json["recent"][0]["category"], "NotUp");
}
