//! Text shown when there is no log to display.

use crate::core::sample::EXPECTED_HEADER;

/// Command that starts the external logger
pub const PRODUCER_COMMAND: &str = "python main.py";

const EXAMPLE_ROWS: [&str; 2] = [
    "2025-10-01 12:00:00,15.2,40.1,58.9,UP,22.5",
    "2025-10-01 12:00:10,18.3,42.0,59.1,UP,20.8",
];

pub fn missing_source_warning(source: &str) -> String {
    format!("⚠️ {} not found. Please run your system logger first.", source)
}

pub fn run_instructions() -> &'static str {
    "Run the following command to generate logs:"
}

/// Header plus a couple of example rows
pub fn example_csv() -> Vec<&'static str> {
    let mut lines = Vec::with_capacity(EXAMPLE_ROWS.len() + 1);
    lines.push(EXPECTED_HEADER);
    lines.extend(EXAMPLE_ROWS);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::LogTable;

    #[test]
    fn test_example_csv_parses() {
        let text = example_csv().join("\n");
        let table = LogTable::parse(&text).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_warning_names_source() {
        assert!(missing_source_warning("log.csv").contains("log.csv not found"));
    }
}
