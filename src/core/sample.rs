//! Log rows and the in-memory table they are loaded into.
//!
//! The table keeps the raw header and row text next to the parsed samples so an
//! export can re-encode the source without touching a single value.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{DashError, Result};

/// Header line written by the logger; columns may appear in any order.
pub const EXPECTED_HEADER: &str = "Timestamp,CPU,Memory,Disk,Ping_Status,Ping_ms";

/// The only status value treated as a live connection (case-sensitive).
pub const UP_STATUS: &str = "UP";

/// Timestamp layout used by the logger
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DELIMITER: char = ',';
const BOM: char = '\u{feff}';

/// One timestamped monitoring observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    pub ping_status: String,
    pub ping_latency_ms: f64,
}

impl Sample {
    pub fn is_up(&self) -> bool {
        self.ping_status == UP_STATUS
    }

    /// Latency values <= 0 mean no ping came back.
    pub fn has_latency(&self) -> bool {
        self.ping_latency_ms > 0.0
    }

    /// Interpret the timestamp label, if it follows the logger's layout.
    pub fn parsed_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.timestamp.trim(), TIMESTAMP_FORMAT).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

/// Column positions resolved from the header by name
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    timestamp: usize,
    cpu: usize,
    memory: usize,
    disk: usize,
    ping_status: usize,
    ping_ms: usize,
    width: usize,
}

impl ColumnMap {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<&str> = header.split(DELIMITER).map(str::trim).collect();
        let find = |name: &str| {
            names
                .iter()
                .position(|n| *n == name)
                .ok_or_else(|| DashError::missing_column(name))
        };

        Ok(Self {
            timestamp: find("Timestamp")?,
            cpu: find("CPU")?,
            memory: find("Memory")?,
            disk: find("Disk")?,
            ping_status: find("Ping_Status")?,
            ping_ms: find("Ping_ms")?,
            width: names.len(),
        })
    }
}

/// Ordered samples from one load of the source, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct LogTable {
    header: String,
    rows: Vec<String>,
    samples: Vec<Sample>,
    line_ending: LineEnding,
    has_bom: bool,
    trailing_newline: bool,
}

impl LogTable {
    /// Parse the full text of a log.
    ///
    /// Blank lines are ignored. Any row with the wrong number of fields or
    /// non-numeric text in a numeric column fails the whole parse; rows are
    /// never skipped. Empty numeric cells load as NaN. The status field is
    /// kept verbatim, surrounding spaces included. Line numbers in errors are
    /// 1-based, header included.
    pub fn parse(text: &str) -> Result<Self> {
        let (text, has_bom) = match text.strip_prefix(BOM) {
            Some(rest) => (rest, true),
            None => (text, false),
        };
        let line_ending = LineEnding::detect(text);
        let trailing_newline = text.ends_with('\n');

        let mut lines = text.lines().enumerate();
        let header = match lines.next() {
            Some((_, line)) if !line.trim().is_empty() => line.to_string(),
            _ => return Err(DashError::parse(1, "empty log, expected a header row")),
        };
        let columns = ColumnMap::from_header(&header)?;

        let mut rows = Vec::new();
        let mut samples = Vec::new();

        for (idx, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;
            samples.push(parse_row(line, line_no, &columns)?);
            rows.push(line.to_string());
        }

        log::debug!("parsed {} samples ({:?} line endings)", samples.len(), line_ending);

        Ok(Self {
            header,
            rows,
            samples,
            line_ending,
            has_bom,
            trailing_newline,
        })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Re-encode the table exactly as it was read: header, then every row,
    /// separated by the source's line ending. The final line is terminated
    /// only if the source's was.
    pub fn to_bytes(&self) -> Vec<u8> {
        let eol = self.line_ending.as_str();
        let capacity = self.header.len()
            + self.rows.iter().map(String::len).sum::<usize>()
            + (self.rows.len() + 1) * eol.len()
            + BOM.len_utf8();

        let mut out = String::with_capacity(capacity);
        if self.has_bom {
            out.push(BOM);
        }
        out.push_str(&self.header);
        for row in &self.rows {
            out.push_str(eol);
            out.push_str(row);
        }
        if self.trailing_newline {
            out.push_str(eol);
        }
        out.into_bytes()
    }
}

fn parse_row(line: &str, line_no: usize, columns: &ColumnMap) -> Result<Sample> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != columns.width {
        return Err(DashError::parse(
            line_no,
            format!("expected {} fields, found {}", columns.width, fields.len()),
        ));
    }

    // An empty cell is a missing value, not a malformed one
    let number = |idx: usize, name: &str| -> Result<f64> {
        let raw = fields[idx].trim();
        if raw.is_empty() {
            return Ok(f64::NAN);
        }
        raw.parse::<f64>().map_err(|_| {
            DashError::parse(
                line_no,
                format!("column '{}' has non-numeric value '{}'", name, raw),
            )
        })
    };

    Ok(Sample {
        timestamp: fields[columns.timestamp].trim().to_string(),
        cpu_percent: number(columns.cpu, "CPU")?,
        memory_percent: number(columns.memory, "Memory")?,
        disk_percent: number(columns.disk, "Disk")?,
        ping_status: fields[columns.ping_status].to_string(),
        ping_latency_ms: number(columns.ping_ms, "Ping_ms")?,
    })
}
