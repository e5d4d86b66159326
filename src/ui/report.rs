//! One-shot text rendering of the dashboard for non-interactive use.

use colored::*;

use crate::core::log_view::{Dashboard, RowCategory, SeriesView};
use crate::ui::guidance;

/// Render every view of a dashboard as colored text.
pub fn render_report(dashboard: &Dashboard) -> String {
    let mut out = Vec::new();

    out.push(format!("{}", "🖥️ System Monitoring Dashboard".bold()));
    if let Some(span) = dashboard.span {
        out.push(format!(
            "{}",
            format!("Covers {} → {}", span.start, span.end).dimmed()
        ));
    }
    out.push(String::new());

    match &dashboard.summary {
        Some(summary) => {
            let ping = if summary.ping_up {
                summary.ping.green().bold()
            } else {
                summary.ping.red().bold()
            };
            out.push(format!("  {:<22}{}", "Latest CPU Usage", summary.cpu.cyan().bold()));
            out.push(format!("  {:<22}{}", "Latest Memory Usage", summary.memory.cyan().bold()));
            out.push(format!("  {:<22}{}", "Latest Disk Usage", summary.disk.cyan().bold()));
            out.push(format!("  {:<22}{}", "Ping Status", ping));
        }
        None => out.push(format!("  {}", "No records in log yet.".dimmed())),
    }
    out.push(String::new());

    out.push(format!("{}", "📊 Latest 5 Records".bold()));
    if !dashboard.recent.is_empty() {
        out.push(format!(
            "  {:<21} {:>7} {:>7} {:>7} {:<11} {:>8}",
            "Timestamp", "CPU", "Memory", "Disk", "Ping_Status", "Ping_ms"
        ));
    }
    for row in &dashboard.recent {
        let s = &row.sample;
        let line = format!(
            "{:<21} {:>7.1} {:>7.1} {:>7.1} {:<11} {:>8.1}",
            s.timestamp, s.cpu_percent, s.memory_percent, s.disk_percent, s.ping_status, s.ping_latency_ms
        );
        let styled = match row.category {
            RowCategory::Up => line.white().on_truecolor(0x02, 0x69, 0x17),
            RowCategory::NotUp => line.white().on_truecolor(0xb5, 0x02, 0x02),
        };
        out.push(format!("  {}", styled));
    }
    out.push(String::new());

    out.push(format!("{}", "📈 CPU / Memory / Disk Usage Over Time".bold()));
    match &dashboard.utilization {
        SeriesView::Data(points) => {
            out.push(range_line("CPU", points.iter().map(|p| p.cpu), "%"));
            out.push(range_line("Memory", points.iter().map(|p| p.memory), "%"));
            out.push(range_line("Disk", points.iter().map(|p| p.disk), "%"));
        }
        SeriesView::NoData => out.push(info("No data available to plot.")),
    }
    out.push(String::new());

    out.push(format!("{}", "🌐 Network Connectivity".bold()));
    match &dashboard.connectivity {
        SeriesView::Data(points) => {
            let up = points.iter().filter(|p| p.up == 1).count();
            out.push(format!(
                "  {:<10}{} of {} samples UP (1 = UP, 0 = DOWN)",
                "Ping_Up",
                up,
                points.len()
            ));
        }
        SeriesView::NoData => out.push(info("No data available to plot.")),
    }
    match &dashboard.latency {
        SeriesView::Data(points) => {
            out.push(range_line("Ping_ms", points.iter().map(|p| p.latency_ms), " ms"));
        }
        SeriesView::NoData => out.push(info("No successful ping responses recorded.")),
    }
    out.push(String::new());

    out.push(format!(
        "📝 Total records in log: {}",
        dashboard.total_records.to_string().bold()
    ));

    out.join("\n")
}

pub fn print_dashboard(dashboard: &Dashboard) {
    println!("{}", render_report(dashboard));
}

/// Guidance shown instead of any data view when the source is missing.
pub fn print_guidance(source: &str) {
    println!("{}", guidance::missing_source_warning(source).yellow().bold());
    print_schema();
}

pub fn print_schema() {
    println!("{}", guidance::run_instructions().white());
    println!("  {}", guidance::PRODUCER_COMMAND.cyan().bold());
    println!();
    println!("{}", "Expected CSV Format".bold());
    for line in guidance::example_csv() {
        println!("  {}", line.dimmed());
    }
}

fn info(message: &str) -> String {
    format!("  {}", format!("ℹ {}", message).blue())
}

fn range_line(label: &str, values: impl Iterator<Item = f64>, unit: &str) -> String {
    let mut count = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut last = 0.0;
    for v in values {
        count += 1;
        min = min.min(v);
        max = max.max(v);
        last = v;
    }

    format!(
        "  {:<10}{} points, min {:.1}{unit}, max {:.1}{unit}, last {:.1}{unit}",
        label, count, min, max, last
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_view::LogView;
    use crate::core::sample::LogTable;

    fn report(text: &str) -> String {
        colored::control::set_override(false);
        render_report(&LogView::derive(&LogTable::parse(text).unwrap()))
    }

    #[test]
    fn test_report_sections() {
        let out = report(
            "Timestamp,CPU,Memory,Disk,Ping_Status,Ping_ms\n\
             2025-10-01 12:00:00,15.2,40.1,58.9,UP,22.5\n\
             2025-10-01 12:00:10,18.349,42.0,59.1,DOWN,-1\n",
        );
        assert!(out.contains("18.3%"));
        assert!(out.contains("❌ DOWN"));
        assert!(out.contains("1 of 2 samples UP"));
        assert!(out.contains("Ping_ms   1 points"));
        assert!(out.contains("Total records in log: 2"));
    }

    #[test]
    fn test_report_empty_table() {
        let out = report("Timestamp,CPU,Memory,Disk,Ping_Status,Ping_ms\n");
        assert!(out.contains("No data available to plot."));
        assert!(out.contains("No successful ping responses recorded."));
        assert!(out.contains("Total records in log: 0"));
    }
}
