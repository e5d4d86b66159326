//! Loading a monitoring log and deriving the views the dashboard renders.
//!
//! Every pass reloads the source from scratch. A missing or unreadable source
//! is not an error: `load` returns `Ok(None)` and renderers show guidance.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;

use super::sample::{LogTable, Sample, UP_STATUS};
use crate::error::Result;

/// Number of rows in the recent-records window
pub const RECENT_WINDOW: usize = 5;

/// Default file name for exports
pub const EXPORT_FILE_NAME: &str = "system_log_export.csv";

pub const EXPORT_MIME: &str = "text/csv";

/// Values for the four summary tiles, taken from the newest sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestSummary {
    pub cpu: String,
    pub memory: String,
    pub disk: String,
    pub ping: String,
    pub ping_up: bool,
}

/// Row-level style key; the renderer decides the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowCategory {
    Up,
    NotUp,
}

impl RowCategory {
    pub fn from_status(status: &str) -> Self {
        if status == UP_STATUS {
            RowCategory::Up
        } else {
            RowCategory::NotUp
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentRow {
    pub sample: Sample,
    pub category: RowCategory,
}

/// A chartable series, or an explicit marker that there is nothing to chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "points", rename_all = "snake_case")]
pub enum SeriesView<T> {
    Data(Vec<T>),
    NoData,
}

impl<T> SeriesView<T> {
    fn from_points(points: Vec<T>) -> Self {
        if points.is_empty() {
            SeriesView::NoData
        } else {
            SeriesView::Data(points)
        }
    }

    pub fn points(&self) -> &[T] {
        match self {
            SeriesView::Data(points) => points,
            SeriesView::NoData => &[],
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, SeriesView::NoData)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationPoint {
    pub timestamp: String,
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectivityPoint {
    pub timestamp: String,
    /// 1 = UP, 0 = anything else
    pub up: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencyPoint {
    pub timestamp: String,
    pub latency_ms: f64,
}

/// First and last timestamps of a table, when both follow the logger's layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSpan {
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// Everything a renderer needs for one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: Option<LatestSummary>,
    pub recent: Vec<RecentRow>,
    pub utilization: SeriesView<UtilizationPoint>,
    pub connectivity: SeriesView<ConnectivityPoint>,
    pub latency: SeriesView<LatencyPoint>,
    pub total_records: usize,
    pub span: Option<TimeSpan>,
}

/// Reads one log source and turns it into dashboard views.
#[derive(Debug, Clone)]
pub struct LogView {
    source: PathBuf,
}

impl LogView {
    pub fn new<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Load the source.
    ///
    /// Returns `Ok(None)` when the file is missing or cannot be read, and an
    /// error when it exists but does not parse.
    pub fn load(&self) -> Result<Option<LogTable>> {
        let text = match fs::read_to_string(&self.source) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("log source {:?} not found", self.source);
                return Ok(None);
            }
            // Reloaded on every TUI tick, so this stays off stderr
            Err(e) => {
                log::debug!("log source {:?} is unreadable: {}", self.source, e);
                return Ok(None);
            }
        };

        let table = LogTable::parse(&text)?;
        log::debug!("loaded {} samples from {:?}", table.len(), self.source);
        Ok(Some(table))
    }

    /// Load and derive in one step.
    pub fn load_dashboard(&self) -> Result<Option<(LogTable, Dashboard)>> {
        Ok(self.load()?.map(|table| {
            let dashboard = Self::derive(&table);
            (table, dashboard)
        }))
    }

    pub fn derive(table: &LogTable) -> Dashboard {
        Dashboard {
            summary: latest_summary(table),
            recent: recent_window(table),
            utilization: utilization_series(table),
            connectivity: connectivity_series(table),
            latency: latency_series(table),
            total_records: table.len(),
            span: time_span(table),
        }
    }
}

pub fn latest_summary(table: &LogTable) -> Option<LatestSummary> {
    let latest = table.last()?;
    let glyph = if latest.is_up() { "✅" } else { "❌" };

    Some(LatestSummary {
        cpu: format_percent(latest.cpu_percent),
        memory: format_percent(latest.memory_percent),
        disk: format_percent(latest.disk_percent),
        ping: format!("{} {}", glyph, latest.ping_status),
        ping_up: latest.is_up(),
    })
}

pub fn recent_window(table: &LogTable) -> Vec<RecentRow> {
    let samples = table.samples();
    let start = samples.len().saturating_sub(RECENT_WINDOW);

    samples[start..]
        .iter()
        .map(|sample| RecentRow {
            category: RowCategory::from_status(&sample.ping_status),
            sample: sample.clone(),
        })
        .collect()
}

pub fn utilization_series(table: &LogTable) -> SeriesView<UtilizationPoint> {
    SeriesView::from_points(
        table
            .samples()
            .iter()
            .map(|s| UtilizationPoint {
                timestamp: s.timestamp.clone(),
                cpu: s.cpu_percent,
                memory: s.memory_percent,
                disk: s.disk_percent,
            })
            .collect(),
    )
}

/// One point per sample over the whole table, not just the recent window.
pub fn connectivity_series(table: &LogTable) -> SeriesView<ConnectivityPoint> {
    SeriesView::from_points(
        table
            .samples()
            .iter()
            .map(|s| ConnectivityPoint {
                timestamp: s.timestamp.clone(),
                up: u8::from(s.is_up()),
            })
            .collect(),
    )
}

pub fn latency_series(table: &LogTable) -> SeriesView<LatencyPoint> {
    SeriesView::from_points(
        table
            .samples()
            .iter()
            .filter(|s| s.has_latency())
            .map(|s| LatencyPoint {
                timestamp: s.timestamp.clone(),
                latency_ms: s.ping_latency_ms,
            })
            .collect(),
    )
}

fn time_span(table: &LogTable) -> Option<TimeSpan> {
    let start = table.samples().first()?.parsed_time()?;
    let end = table.last()?.parsed_time()?;
    Some(TimeSpan { start, end })
}

/// Re-encode the full table for download; values are never re-derived.
pub fn serialize(table: &LogTable) -> Vec<u8> {
    table.to_bytes()
}

/// Write the serialized table to `dir/file_name` and return the written path.
pub fn export_to(table: &LogTable, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    write_export(table, &path)?;
    Ok(path)
}

/// Write the serialized table to `path`, creating missing parent directories.
pub fn write_export(table: &LogTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serialize(table))?;
    log::info!(
        "exported {} records to {:?} ({})",
        table.len(),
        path,
        EXPORT_MIME
    );
    Ok(())
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
