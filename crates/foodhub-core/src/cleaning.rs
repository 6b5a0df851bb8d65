use foodhub_parser::{OrderColumn, OrderTable};
use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

pub const COMPANY_REVENUE_COLUMN: &str = "company_revenue";
pub const TOTAL_TIME_COLUMN: &str = "total_time";

/// Rating stored for orders the customer never rated.
pub const UNRATED: f64 = 0.0;

/// Orders with numeric cost and rating columns.
///
/// `cost_of_the_order` is nullable f64; `rating` is f64 and never null, with
/// [`UNRATED`] standing in for a missing rating.
#[derive(Debug, Clone)]
pub struct CleanedOrders {
    df: DataFrame,
}

impl CleanedOrders {
    pub fn df(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    pub fn customer_id(&self) -> PolarsResult<&Int64Chunked> {
        self.df.column(OrderColumn::CustomerId.name())?.i64()
    }

    pub fn restaurant_name(&self) -> PolarsResult<&StringChunked> {
        self.df.column(OrderColumn::RestaurantName.name())?.str()
    }

    pub fn cuisine_type(&self) -> PolarsResult<&StringChunked> {
        self.df.column(OrderColumn::CuisineType.name())?.str()
    }

    pub fn day_of_the_week(&self) -> PolarsResult<&StringChunked> {
        self.df.column(OrderColumn::DayOfTheWeek.name())?.str()
    }

    pub fn cost(&self) -> PolarsResult<&Float64Chunked> {
        self.df.column(OrderColumn::CostOfTheOrder.name())?.f64()
    }

    pub fn rating(&self) -> PolarsResult<&Float64Chunked> {
        self.df.column(OrderColumn::Rating.name())?.f64()
    }

    pub fn food_preparation_time(&self) -> PolarsResult<&Int64Chunked> {
        self.df.column(OrderColumn::FoodPreparationTime.name())?.i64()
    }

    pub fn delivery_time(&self) -> PolarsResult<&Int64Chunked> {
        self.df.column(OrderColumn::DeliveryTime.name())?.i64()
    }

    /// Present once [`crate::metrics::apply_derived_metrics`] has run.
    pub fn company_revenue(&self) -> PolarsResult<&Float64Chunked> {
        self.df.column(COMPANY_REVENUE_COLUMN)?.f64()
    }

    /// Present once [`crate::metrics::apply_derived_metrics`] has run.
    pub fn total_time(&self) -> PolarsResult<&Int64Chunked> {
        self.df.column(TOTAL_TIME_COLUMN)?.i64()
    }

    pub(crate) fn with_columns(&self, columns: &[Column]) -> PolarsResult<CleanedOrders> {
        let mut df = self.df.clone();
        df.hstack_mut(columns)?;
        Ok(CleanedOrders { df })
    }
}

/// Parses a raw cell as a number; anything unparseable (including "NaN") is missing.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Returns a new frame with cost and rating coerced to f64 and missing ratings set to [`UNRATED`].
pub fn clean_orders(table: &OrderTable) -> PolarsResult<CleanedOrders> {
    let raw_cost = table.cost_of_the_order()?;
    let raw_rating = table.rating()?;

    let cost: Vec<Option<f64>> = (0..table.height())
        .map(|idx| raw_cost.get(idx).and_then(coerce_numeric))
        .collect();
    let rating: Vec<f64> = (0..table.height())
        .map(|idx| raw_rating.get(idx).and_then(coerce_numeric).unwrap_or(UNRATED))
        .collect();

    let coerced_costs = cost.iter().filter(|value| value.is_none()).count();
    debug!(
        rows = table.height(),
        missing_costs = coerced_costs,
        "coerced cost and rating columns"
    );

    let mut df = table.df().clone();
    df.with_column(Series::new(OrderColumn::CostOfTheOrder.name().into(), cost))?;
    df.with_column(Series::new(OrderColumn::Rating.name().into(), rating))?;

    Ok(CleanedOrders { df })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingValues {
    pub column: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQuality {
    pub missing_values: Vec<MissingValues>,
    pub total_missing: usize,
    pub is_clean: bool,
    pub unrated_orders: usize,
}

/// Missing values are counted on the raw table, before numeric coercion, so
/// placeholder text such as "Not given" does not count as missing.
pub fn assess_quality(raw: &OrderTable, cleaned: &CleanedOrders) -> PolarsResult<DataQuality> {
    let missing_values: Vec<MissingValues> = raw
        .missing_values()
        .into_iter()
        .map(|(column, count)| MissingValues {
            column: column.name().to_string(),
            count,
        })
        .collect();
    let total_missing = missing_values.iter().map(|entry| entry.count).sum();

    let rating = cleaned.rating()?;
    let unrated_orders = (0..rating.len())
        .filter(|&idx| rating.get(idx) == Some(UNRATED))
        .count();

    Ok(DataQuality {
        missing_values,
        total_missing,
        is_clean: total_missing == 0,
        unrated_orders,
    })
}
