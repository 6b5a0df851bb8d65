use std::fmt;

use foodhub_parser::OrderColumn;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cleaning::CleanedOrders;

const KEY: &str = "key";
const COUNT: &str = "count";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    Cuisine,
    Day,
    Restaurant,
    Customer,
}

impl GroupKey {
    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::Cuisine => "Cuisine Type",
            GroupKey::Day => "Day of the Week",
            GroupKey::Restaurant => "Restaurant Name",
            GroupKey::Customer => "Customer ID",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            GroupKey::Cuisine => OrderColumn::CuisineType.name(),
            GroupKey::Day => OrderColumn::DayOfTheWeek.name(),
            GroupKey::Restaurant => OrderColumn::RestaurantName.name(),
            GroupKey::Customer => OrderColumn::CustomerId.name(),
        }
    }

    /// Group labels as text; customer ids become decimal strings.
    fn expr(&self) -> Expr {
        col(self.column()).cast(DataType::String).alias(KEY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Cost,
    Rating,
    PreparationTime,
    DeliveryTime,
}

impl Measure {
    pub fn label(&self) -> &'static str {
        match self {
            Measure::Cost => "cost_of_the_order",
            Measure::Rating => "rating",
            Measure::PreparationTime => "food_preparation_time",
            Measure::DeliveryTime => "delivery_time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Mean,
    Median,
    Min,
    Max,
    Count,
}

impl Statistic {
    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Count => "count",
        }
    }

    /// Aggregation of `measure` over a group. Missing values are skipped, so
    /// Count is the number of present values.
    fn expr(&self, measure: Measure) -> Expr {
        let values = col(measure.label()).cast(DataType::Float64);
        let aggregated = match self {
            Statistic::Mean => values.mean(),
            Statistic::Median => values.median(),
            Statistic::Min => values.min(),
            Statistic::Max => values.max(),
            Statistic::Count => values.count(),
        };
        let column = StatColumn {
            measure,
            statistic: *self,
        };
        aggregated.cast(DataType::Float64).alias(column.label())
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatColumn {
    pub measure: Measure,
    pub statistic: Statistic,
}

impl StatColumn {
    pub fn label(&self) -> String {
        format!("{}_{}", self.measure.label(), self.statistic.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub key: String,
    pub values: Vec<f64>,
}

/// One row per distinct key, keys in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedStats {
    pub key: GroupKey,
    pub columns: Vec<StatColumn>,
    pub rows: Vec<GroupRow>,
}

impl GroupedStats {
    pub fn row(&self, key: &str) -> Option<&GroupRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn value(&self, key: &str, measure: Measure, statistic: Statistic) -> Option<f64> {
        let position = self
            .columns
            .iter()
            .position(|column| column.measure == measure && column.statistic == statistic)?;
        self.row(key).map(|row| row.values[position])
    }
}

/// Groups `orders` by `key` and computes each requested statistic per measure.
///
/// Rows with a missing key are dropped. A group whose values are all missing
/// reports NaN (and a count of 0).
pub fn group_stats(
    orders: &CleanedOrders,
    key: GroupKey,
    requested: &[(Measure, &[Statistic])],
) -> PolarsResult<GroupedStats> {
    let columns: Vec<StatColumn> = requested
        .iter()
        .flat_map(|(measure, statistics)| {
            statistics.iter().map(move |statistic| StatColumn {
                measure: *measure,
                statistic: *statistic,
            })
        })
        .collect();
    let aggregations: Vec<Expr> = columns
        .iter()
        .map(|column| column.statistic.expr(column.measure))
        .collect();

    let grouped = orders
        .df()
        .clone()
        .lazy()
        .with_column(key.expr())
        .filter(col(KEY).is_not_null())
        .group_by([col(KEY)])
        .agg(aggregations)
        .sort([KEY], SortMultipleOptions::default())
        .collect()?;

    let keys = grouped.column(KEY)?.str()?;
    let values = columns
        .iter()
        .map(|column| grouped.column(&column.label())?.f64())
        .collect::<PolarsResult<Vec<_>>>()?;

    let rows = (0..grouped.height())
        .filter_map(|idx| {
            let key = keys.get(idx)?.to_string();
            let values = values
                .iter()
                .map(|stat| stat.get(idx).unwrap_or(f64::NAN))
                .collect();
            Some(GroupRow { key, values })
        })
        .collect();

    Ok(GroupedStats { key, columns, rows })
}

/// Per-group mean of one measure, keys in ascending order.
pub fn group_mean(
    orders: &CleanedOrders,
    key: GroupKey,
    measure: Measure,
) -> PolarsResult<Vec<(String, f64)>> {
    let grouped = group_stats(orders, key, &[(measure, &[Statistic::Mean])])?;
    Ok(grouped
        .rows
        .into_iter()
        .map(|row| (row.key, row.values[0]))
        .collect())
}

/// Rows per distinct key, most frequent first. Equal counts keep the order in
/// which the keys first appear.
pub fn value_counts(orders: &CleanedOrders, key: GroupKey) -> PolarsResult<Vec<(String, usize)>> {
    frame_value_counts(orders.df(), key)
}

pub(crate) fn frame_value_counts(
    df: &DataFrame,
    key: GroupKey,
) -> PolarsResult<Vec<(String, usize)>> {
    let counts = df
        .clone()
        .lazy()
        .select([key.expr()])
        .filter(col(KEY).is_not_null())
        .group_by_stable([col(KEY)])
        .agg([len().alias(COUNT)])
        .sort(
            [COUNT],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .collect()?;

    let keys = counts.column(KEY)?.str()?;
    let totals = counts.column(COUNT)?.cast(&DataType::Int64)?;
    let totals = totals.i64()?;
    Ok((0..counts.height())
        .filter_map(|idx| Some((keys.get(idx)?.to_string(), totals.get(idx)? as usize)))
        .collect())
}

/// Realigns `entries` over `labels`; labels without an entry get `fill`.
/// Entries whose key is not in `labels` are dropped.
pub fn reindex(entries: &[(String, f64)], labels: &[&str], fill: f64) -> Vec<(String, f64)> {
    labels
        .iter()
        .map(|label| {
            let value = entries
                .iter()
                .find(|(key, _)| key == label)
                .map(|(_, value)| *value)
                .unwrap_or(fill);
            (label.to_string(), value)
        })
        .collect()
}
