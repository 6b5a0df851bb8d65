use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Histogram { bins: usize },
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// A chart handed to the presentation layer: labelled values plus axis titles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
    /// Vertical reference line, in x-axis units.
    pub marker: Option<f64>,
}

impl ChartSpec {
    pub fn bar<I, L>(title: &str, x_label: &str, y_label: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        Self {
            kind: ChartKind::Bar,
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            points: entries
                .into_iter()
                .map(|(label, value)| ChartPoint {
                    label: label.into(),
                    value,
                })
                .collect(),
            marker: None,
        }
    }

    pub fn histogram(title: &str, x_label: &str, values: &[f64], bins: usize) -> Self {
        let points = histogram(values, bins)
            .into_iter()
            .map(|bin| ChartPoint {
                label: format!("{:.2}-{:.2}", bin.lower, bin.upper),
                value: bin.count as f64,
            })
            .collect();

        Self {
            kind: ChartKind::Histogram { bins },
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: "Count".to_string(),
            points,
            marker: None,
        }
    }

    pub fn with_marker(mut self, marker: f64) -> Self {
        self.marker = Some(marker);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width bins spanning min..=max; the last bin includes its upper edge.
/// When all values are equal the range is widened by 0.5 on each side.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 || values.is_empty() {
        return Vec::new();
    }

    let values = Float64Chunked::from_slice("values".into(), values);
    let (Some(mut lo), Some(mut hi)) = (values.min(), values.max()) else {
        return Vec::new();
    };
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in values.into_no_null_iter() {
        let slot = ((value - lo) / width).floor() as usize;
        counts[slot.min(bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: lo + width * idx as f64,
            upper: lo + width * (idx + 1) as f64,
            count,
        })
        .collect()
}
