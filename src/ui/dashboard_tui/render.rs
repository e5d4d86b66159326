use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

use super::app::{DashboardApp, LoadState};
use super::widgets::{
    category_color, headroom, info_message, line_chart, line_dataset, metric_tile, usage_color,
};
use crate::core::log_view::{Dashboard, SeriesView, TimeSpan};
use crate::ui::guidance;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match &app.state {
        LoadState::Absent => render_guidance(frame, chunks[1], app),
        LoadState::Failed(message) => render_load_error(frame, chunks[1], message),
        LoadState::Loaded { dashboard, .. } => render_dashboard(frame, chunks[1], dashboard),
    }

    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let span_str = match app.dashboard().and_then(|d| d.span) {
        Some(span) => format!(" │ Span: {}", format_span(&span)),
        None => String::new(),
    };

    let title = format!(
        " 🖥️ System Monitoring Dashboard │ Source: {} │ Refresh: {}ms{} ",
        app.view.source().display(),
        app.interval_ms,
        span_str
    );

    let border_color = match app.state {
        LoadState::Loaded { .. } => Color::Cyan,
        LoadState::Absent => Color::Yellow,
        LoadState::Failed(_) => Color::Red,
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(block, area);
}

fn format_span(span: &TimeSpan) -> String {
    let secs = span.duration().num_seconds().max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

/// Shown instead of every data view when the source is missing
fn render_guidance(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let source = app.view.source().display().to_string();

    let mut lines = vec![
        Line::from(Span::styled(
            guidance::missing_source_warning(&source),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(guidance::run_instructions()),
        Line::from(Span::styled(
            format!("    {}", guidance::PRODUCER_COMMAND),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Expected CSV Format",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    lines.extend(guidance::example_csv().into_iter().map(|row| {
        Line::from(Span::styled(
            format!("    {}", row),
            Style::default().fg(Color::Gray),
        ))
    }));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" No data "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_load_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Failed to load log",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "The log is reloaded on every refresh.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_dashboard(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Metric tiles
            Constraint::Length(8),      // Latest 5 records
            Constraint::Percentage(55), // CPU / Memory / Disk chart
            Constraint::Min(6),         // Network connectivity
        ])
        .split(area);

    render_metric_tiles(frame, chunks[0], dashboard);
    render_recent_records(frame, chunks[1], dashboard);
    render_utilization_chart(frame, chunks[2], dashboard);
    render_network_section(frame, chunks[3], dashboard);
}

fn render_metric_tiles(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    // Empty table: labelled tiles with nothing in them
    let Some(summary) = dashboard.summary.as_ref() else {
        let labels = [
            "Latest CPU Usage",
            "Latest Memory Usage",
            "Latest Disk Usage",
            "Ping Status",
        ];
        for (label, tile) in labels.into_iter().zip(tiles.iter()) {
            frame.render_widget(metric_tile(label, None, Color::White), *tile);
        }
        return;
    };

    let latest = dashboard.recent.last().map(|row| &row.sample);
    let color_for = |value: Option<f64>| value.map(usage_color).unwrap_or(Color::White);

    frame.render_widget(
        metric_tile(
            "Latest CPU Usage",
            Some(summary.cpu.as_str()),
            color_for(latest.map(|s| s.cpu_percent)),
        ),
        tiles[0],
    );
    frame.render_widget(
        metric_tile(
            "Latest Memory Usage",
            Some(summary.memory.as_str()),
            color_for(latest.map(|s| s.memory_percent)),
        ),
        tiles[1],
    );
    frame.render_widget(
        metric_tile(
            "Latest Disk Usage",
            Some(summary.disk.as_str()),
            color_for(latest.map(|s| s.disk_percent)),
        ),
        tiles[2],
    );

    let ping_color = if summary.ping_up {
        Color::Green
    } else {
        Color::Red
    };
    frame.render_widget(
        metric_tile("Ping Status", Some(summary.ping.as_str()), ping_color),
        tiles[3],
    );
}

fn render_recent_records(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let block = Block::default()
        .title(" 📊 Latest 5 Records ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if dashboard.recent.is_empty() {
        frame.render_widget(info_message("No records yet."), inner);
        return;
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Timestamp").style(bold),
        Cell::from("CPU").style(bold),
        Cell::from("Memory").style(bold),
        Cell::from("Disk").style(bold),
        Cell::from("Ping_Status").style(bold),
        Cell::from("Ping_ms").style(bold),
    ])
    .height(1);

    let rows: Vec<Row> = dashboard
        .recent
        .iter()
        .map(|row| {
            let sample = &row.sample;
            Row::new(vec![
                Cell::from(sample.timestamp.clone()),
                Cell::from(format!("{:.1}", sample.cpu_percent)),
                Cell::from(format!("{:.1}", sample.memory_percent)),
                Cell::from(format!("{:.1}", sample.disk_percent)),
                Cell::from(sample.ping_status.clone()),
                Cell::from(format!("{:.1}", sample.ping_latency_ms)),
            ])
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(category_color(row.category)),
            )
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(21),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(9),
        ],
    )
    .header(header);

    frame.render_widget(table, inner);
}

fn render_utilization_chart(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let block = Block::default()
        .title(" 📈 CPU / Memory / Disk Usage Over Time ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let points = match &dashboard.utilization {
        SeriesView::Data(points) => points,
        SeriesView::NoData => {
            frame.render_widget(info_message("No data available to plot."), inner);
            return;
        }
    };

    let cpu = indexed(points, |p| p.cpu);
    let memory = indexed(points, |p| p.memory);
    let disk = indexed(points, |p| p.disk);

    let first = points.first().map(|p| p.timestamp.as_str()).unwrap_or("");
    let last = points.last().map(|p| p.timestamp.as_str()).unwrap_or("");

    let chart = line_chart(
        vec![
            line_dataset("CPU", &cpu, Color::Cyan),
            line_dataset("Memory", &memory, Color::Magenta),
            line_dataset("Disk", &disk, Color::Yellow),
        ],
        points.len(),
        (first, last),
        [0.0, 100.0],
        vec!["0".to_string(), "50".to_string(), "100".to_string()],
    );

    frame.render_widget(chart, inner);
}

fn render_network_section(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let block = Block::default()
        .title(" 🌐 Network Connectivity ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    render_connectivity_chart(frame, columns[0], dashboard);
    render_latency_chart(frame, columns[1], dashboard);
}

/// Chart coordinates: sample position on x, the selected field on y
fn indexed<T>(points: &[T], value: impl Fn(&T) -> f64) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, value(p)))
        .collect()
}

/// Split a chart area into the chart and a one-line caption
fn with_caption(frame: &mut Frame, area: Rect, caption: &str) -> Rect {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let caption = Paragraph::new(caption.to_string()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(caption, parts[1]);
    parts[0]
}

fn render_connectivity_chart(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let points = match &dashboard.connectivity {
        SeriesView::Data(points) => points,
        SeriesView::NoData => {
            frame.render_widget(info_message("No data available to plot."), area);
            return;
        }
    };

    let chart_area = with_caption(frame, area, "1 = UP, 0 = DOWN");

    let data = indexed(points, |p| f64::from(p.up));
    let first = points.first().map(|p| p.timestamp.as_str()).unwrap_or("");
    let last = points.last().map(|p| p.timestamp.as_str()).unwrap_or("");

    let chart = line_chart(
        vec![line_dataset("Ping_Up", &data, Color::Green)],
        points.len(),
        (first, last),
        [0.0, 1.0],
        vec!["0".to_string(), "1".to_string()],
    );
    frame.render_widget(chart, chart_area);
}

fn render_latency_chart(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let points = match &dashboard.latency {
        SeriesView::Data(points) => points,
        SeriesView::NoData => {
            frame.render_widget(
                info_message("No successful ping responses recorded."),
                area,
            );
            return;
        }
    };

    let chart_area = with_caption(frame, area, "Response time in milliseconds");

    let data = indexed(points, |p| p.latency_ms);
    let max = points.iter().map(|p| p.latency_ms).fold(0.0, f64::max);
    let top = headroom(max);
    let first = points.first().map(|p| p.timestamp.as_str()).unwrap_or("");
    let last = points.last().map(|p| p.timestamp.as_str()).unwrap_or("");

    let chart = line_chart(
        vec![line_dataset("Ping_ms", &data, Color::LightBlue)],
        points.len(),
        (first, last),
        [0.0, top],
        vec!["0".to_string(), format!("{:.0}", top)],
    );
    frame.render_widget(chart, chart_area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let records = match app.dashboard() {
        Some(dashboard) => format!(" 📝 Total records in log: {} │", dashboard.total_records),
        None => String::new(),
    };
    let status = app
        .status
        .as_deref()
        .map(|s| format!(" │ {}", s))
        .unwrap_or_default();

    let text = format!(
        "{} q: Quit │ ?: Help │ r: Reload │ e: Export{} ",
        records, status
    );
    let para = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    sysdash - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc     Quit the application
    ? / h       Toggle this help screen
    r / F5      Reload the log now
    e           Export the full log as CSV

    The log is reloaded on every refresh tick.
    Press any key to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    // Center the help popup
    let popup_area = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
