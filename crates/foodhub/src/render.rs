//! Terminal rendering of reports with comfy-table.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use foodhub_core::charts::{ChartKind, ChartSpec};
use foodhub_core::report::{Cell, Report, ReportItem, ReportValue, TableValue};

const BAR_WIDTH: usize = 40;

pub fn render_report(report: &Report) -> String {
    let meta = &report.metadata;
    let mut out = String::new();
    out.push_str(&format!(
        "FoodHub Order Analysis\nsource: {} ({} bytes, blake3 {})\nrows: {} loaded, {} selected\nrun: {} at {}\n",
        meta.source.path,
        meta.source.byte_len,
        meta.source.blake3,
        meta.rows_loaded,
        meta.rows_selected,
        meta.run_id,
        meta.generated_at.to_rfc3339(),
    ));
    if !meta.filter.cuisines.is_empty() {
        out.push_str(&format!("cuisines: {}\n", meta.filter.cuisines.join(", ")));
    }
    if !meta.filter.days.is_empty() {
        out.push_str(&format!("days: {}\n", meta.filter.days.join(", ")));
    }

    for item in &report.items {
        out.push('\n');
        out.push_str(&render_item(item));
    }
    out
}

fn render_item(item: &ReportItem) -> String {
    let mut out = format!("== {} ==\n", item.title);
    match &item.value {
        ReportValue::Number(value) => out.push_str(&format!("{}\n", format_number(*value))),
        ReportValue::Count(count) => out.push_str(&format!("{count}\n")),
        ReportValue::Flag(flag) => out.push_str(if *flag { "Yes\n" } else { "No\n" }),
        ReportValue::Text(text) => {
            out.push_str(text);
            out.push('\n');
        }
        ReportValue::Table(table) => {
            out.push_str(&render_table(table));
            out.push('\n');
        }
    }
    if let Some(chart) = &item.chart {
        out.push_str(&render_chart(chart));
    }
    out
}

pub fn render_table(value: &TableValue) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(value.headers.clone());
    for row in &value.rows {
        table.add_row(row.iter().map(format_cell).collect::<Vec<_>>());
    }
    table.to_string()
}

fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Integer(value) => value.to_string(),
        Cell::Number(value) => format_number(*value),
        Cell::Text(text) => text.clone(),
        Cell::Missing => String::new(),
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Horizontal bars scaled to the largest value in the chart.
fn render_chart(chart: &ChartSpec) -> String {
    let mut out = format!("\n{} ({} vs {})\n", chart.title, chart.y_label, chart.x_label);
    if let ChartKind::Histogram { bins } = chart.kind {
        out.push_str(&format!("{bins} bins\n"));
    }
    if chart.points.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let label_width = chart
        .points
        .iter()
        .map(|point| point.label.chars().count())
        .max()
        .unwrap_or(0);
    let peak = chart
        .points
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);

    for point in &chart.points {
        let length = if peak > 0.0 && point.value.is_finite() {
            ((point.value / peak) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<label_width$} | {} {}\n",
            point.label,
            "█".repeat(length),
            format_number(point.value),
        ));
    }
    if let Some(marker) = chart.marker {
        out.push_str(&format!("marker at {}\n", format_number(marker)));
    }
    out
}
