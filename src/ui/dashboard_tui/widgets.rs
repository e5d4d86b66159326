use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::core::log_view::RowCategory;

/// Row background for the recent-records table
pub fn category_color(category: RowCategory) -> Color {
    match category {
        RowCategory::Up => Color::Rgb(0x02, 0x69, 0x17),
        RowCategory::NotUp => Color::Rgb(0xb5, 0x02, 0x02),
    }
}

/// Color for a utilization percentage
pub fn usage_color(value: f64) -> Color {
    match value {
        v if v < 50.0 => Color::Cyan,
        v if v < 75.0 => Color::LightYellow,
        v if v < 90.0 => Color::LightRed,
        _ => Color::Red,
    }
}

/// A bordered tile with a label and one bold value
pub fn metric_tile<'a>(label: &'a str, value: Option<&'a str>, color: Color) -> Paragraph<'a> {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL);

    let text = value.unwrap_or("");
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block)
}

pub fn line_dataset<'a>(name: &'a str, data: &'a [(f64, f64)], color: Color) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

/// Line chart indexed by sample position, labelled with the first and last timestamps.
pub fn line_chart<'a>(
    datasets: Vec<Dataset<'a>>,
    point_count: usize,
    x_labels: (&'a str, &'a str),
    y_bounds: [f64; 2],
    y_labels: Vec<String>,
) -> Chart<'a> {
    let x_max = point_count.saturating_sub(1).max(1) as f64;

    Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels([x_labels.0, x_labels.1]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds(y_bounds)
                .labels(y_labels),
        )
}

/// Informational placeholder used instead of an empty chart
pub fn info_message(message: &str) -> Paragraph<'_> {
    Paragraph::new(format!("ℹ {}", message)).style(Style::default().fg(Color::LightBlue))
}

/// Upper y bound with some headroom above the largest value
pub fn headroom(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}
