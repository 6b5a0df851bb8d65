use polars::prelude::*;
use serde::Serialize;

/// count / mean / std / min / quartiles / max for one numeric column.
///
/// Missing values are skipped. Statistics that are undefined for the present
/// values (all of them on an empty column, std below two values) are NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    pub fn from_chunked(column: impl Into<String>, values: &Float64Chunked) -> PolarsResult<Self> {
        Ok(Self {
            column: column.into(),
            count: values.len() - values.null_count(),
            mean: or_nan(values.mean()),
            std: or_nan(values.std(1)),
            min: or_nan(values.min()),
            q25: or_nan(values.quantile(0.25, QuantileMethod::Linear)?),
            median: or_nan(values.median()),
            q75: or_nan(values.quantile(0.75, QuantileMethod::Linear)?),
            max: or_nan(values.max()),
        })
    }

    pub fn from_values(column: impl Into<String>, values: &[f64]) -> PolarsResult<Self> {
        let column = column.into();
        let values = Float64Chunked::from_slice(column.as_str().into(), values);
        Self::from_chunked(column, &values)
    }
}

/// Summaries for every integer and float column of `df`, in column order.
pub fn describe(df: &DataFrame) -> PolarsResult<Vec<ColumnSummary>> {
    let mut summaries = Vec::new();
    for column in df.get_columns() {
        if !matches!(column.dtype(), DataType::Int64 | DataType::Float64) {
            continue;
        }
        let values = column.cast(&DataType::Float64)?;
        summaries.push(ColumnSummary::from_chunked(
            column.name().as_str(),
            values.f64()?,
        )?);
    }
    Ok(summaries)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSummary {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

pub fn summarize(values: &Float64Chunked) -> RangeSummary {
    RangeSummary {
        min: or_nan(values.min()),
        mean: or_nan(values.mean()),
        max: or_nan(values.max()),
    }
}

/// Present values as f64, for chart input.
pub fn present_values(values: &Float64Chunked) -> Vec<f64> {
    values.into_iter().flatten().collect()
}

pub(crate) fn or_nan(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}
