//! Tour chart rendering.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Fraction of the coordinate span added as margin on each side.
const BOUNDS_PADDING: f64 = 0.15;

/// Draw the tour chart: stop markers, the path in visit order, and the
/// closing segment from the last stop back to the first.
pub(super) fn draw_plot(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let Some(bounds) = app.route.bounds() else {
        let para = Paragraph::new("No stops to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    };

    let (x_min, x_max) = padded(bounds.x_min, bounds.x_max);
    let (y_min, y_max) = padded(bounds.y_min, bounds.y_max);

    let stops: Vec<(f64, f64)> = app.route.points().iter().map(|p| (p.x, p.y)).collect();

    let (last, first) = app.closing;
    let closing = vec![(last.x, last.y), (first.x, first.y)];

    let highlighted: Vec<(f64, f64)> = app
        .current_stop()
        .map(|p| vec![(p.x, p.y)])
        .unwrap_or_default();

    let mut datasets = vec![
        Dataset::default()
            .name("path")
            .marker(ratatui::symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.path))
            .data(&stops),
        Dataset::default()
            .name("closing")
            .marker(ratatui::symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.path))
            .data(&closing),
        Dataset::default()
            .name("stops")
            .marker(ratatui::symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.stop))
            .data(&stops),
    ];

    if !highlighted.is_empty() {
        datasets.push(
            Dataset::default()
                .name("cursor")
                .marker(ratatui::symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.highlight))
                .data(&highlighted),
        );
    }

    let x_labels = vec![
        format_axis_label(x_min),
        format_axis_label((x_min + x_max) / 2.0),
        format_axis_label(x_max),
    ];
    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.text))
        .bounds([x_min, x_max])
        .labels(x_labels);

    let y_labels = vec![
        format_axis_label(y_min),
        format_axis_label((y_min + y_max) / 2.0),
        format_axis_label(y_max),
    ];
    let y_axis = Axis::default()
        .title("y")
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(y_labels);

    // Title with a readout for the highlighted stop
    let file_name = app
        .file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "route".to_string());
    let readout = match app.current_stop() {
        Some(p) => format!(
            " {} | stop {}/{} @ ({}, {}) ",
            file_name,
            app.cursor + 1,
            app.route.len(),
            p.x,
            p.y
        ),
        None => format!(" {} ", file_name),
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(readout)
                .title_style(Style::default().fg(colors.heading)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Pad a coordinate span for display.
///
/// The minimum pad keeps the bounds non-degenerate for single-stop routes,
/// which must still render.
fn padded(min: f64, max: f64) -> (f64, f64) {
    let pad = ((max - min).abs() * BOUNDS_PADDING).max(1.0);
    (min - pad, max + pad)
}

/// Format axis label with smart precision.
fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_bounds_stay_non_degenerate_for_a_single_stop() {
        let (lo, hi) = padded(3.0, 3.0);
        assert!(lo < 3.0);
        assert!(hi > 3.0);
    }

    #[test]
    fn padded_bounds_extend_a_real_span_by_the_margin() {
        let (lo, hi) = padded(0.0, 100.0);
        assert_eq!(lo, -15.0);
        assert_eq!(hi, 115.0);
    }

    #[test]
    fn axis_labels_pick_precision_by_magnitude() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(250.0), "250");
        assert_eq!(format_axis_label(2.5), "2.5");
        assert_eq!(format_axis_label(0.25), "0.25");
        assert_eq!(format_axis_label(1.0e6), "1.0e6");
    }
}
