use std::collections::HashSet;
use std::path::Path;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;
use crate::formats::schema::{ColumnKind, OrderColumn, ORDER_COLUMNS};
use crate::formats::OrderColumns;

/// One order as it appears in the source file.
///
/// Numeric identifiers and minute counts are validated while loading; cost and
/// rating keep the raw cell text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub order_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub restaurant_name: Option<String>,
    pub cuisine_type: Option<String>,
    pub cost_of_the_order: Option<String>,
    pub day_of_the_week: Option<String>,
    pub rating: Option<String>,
    pub food_preparation_time: Option<i64>,
    pub delivery_time: Option<i64>,
}

impl OrderRow {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_id: i64,
        restaurant_name: impl Into<String>,
        cuisine_type: impl Into<String>,
        cost_of_the_order: impl Into<String>,
        day_of_the_week: impl Into<String>,
        rating: impl Into<String>,
        food_preparation_time: i64,
        delivery_time: i64,
    ) -> Self {
        Self {
            order_id: None,
            customer_id: Some(customer_id),
            restaurant_name: Some(restaurant_name.into()),
            cuisine_type: Some(cuisine_type.into()),
            cost_of_the_order: Some(cost_of_the_order.into()),
            day_of_the_week: Some(day_of_the_week.into()),
            rating: Some(rating.into()),
            food_preparation_time: Some(food_preparation_time),
            delivery_time: Some(delivery_time),
        }
    }
}

/// Schema-validated order data backed by a polars `DataFrame`.
#[derive(Debug, Clone)]
pub struct OrderTable {
    df: DataFrame,
}

impl OrderTable {
    /// Wraps `df` after checking every order column is present with its storage type.
    pub fn new(df: DataFrame) -> Result<Self, SchemaError> {
        for column in ORDER_COLUMNS {
            let series = df
                .column(column.name())
                .map_err(|_| SchemaError::MissingColumn {
                    column: column.name(),
                })?;
            let expected = match column.kind() {
                ColumnKind::Integer => DataType::Int64,
                ColumnKind::Text => DataType::String,
            };
            if series.dtype() != &expected {
                return Err(SchemaError::ColumnType {
                    column: column.name(),
                    expected: column.kind().dtype_name(),
                    found: series.dtype().to_string(),
                });
            }
        }

        Ok(Self { df })
    }

    /// Builds a table from typed rows. Rows without an `order_id` are numbered from 1.
    pub fn from_rows(rows: &[OrderRow]) -> Result<Self, SchemaError> {
        let mut columns = OrderColumns::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            let mut row = row.clone();
            if row.order_id.is_none() {
                row.order_id = Some(idx as i64 + 1);
            }
            columns.push(row);
        }
        columns.build()
    }

    pub fn df(&self) -> &DataFrame {
        &self.df
    }

    pub fn into_inner(self) -> DataFrame {
        self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    pub fn order_id(&self) -> PolarsResult<&Int64Chunked> {
        self.df.column(OrderColumn::OrderId.name())?.i64()
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

    pub fn cost_of_the_order(&self) -> PolarsResult<&StringChunked> {
        self.df.column(OrderColumn::CostOfTheOrder.name())?.str()
    }

    pub fn day_of_the_week(&self) -> PolarsResult<&StringChunked> {
        self.df.column(OrderColumn::DayOfTheWeek.name())?.str()
    }

    pub fn rating(&self) -> PolarsResult<&StringChunked> {
        self.df.column(OrderColumn::Rating.name())?.str()
    }

    pub fn food_preparation_time(&self) -> PolarsResult<&Int64Chunked> {
        self.df.column(OrderColumn::FoodPreparationTime.name())?.i64()
    }

    pub fn delivery_time(&self) -> PolarsResult<&Int64Chunked> {
        self.df.column(OrderColumn::DeliveryTime.name())?.i64()
    }

    /// Distinct non-null values of a text column in order of first appearance.
    pub fn distinct(&self, column: OrderColumn) -> PolarsResult<Vec<String>> {
        let values = self.df.column(column.name())?.str()?;
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for idx in 0..values.len() {
            if let Some(value) = values.get(idx) {
                if seen.insert(value) {
                    ordered.push(value.to_string());
                }
            }
        }
        Ok(ordered)
    }

    /// Null count per order column, in schema order.
    pub fn missing_values(&self) -> Vec<(OrderColumn, usize)> {
        ORDER_COLUMNS
            .iter()
            .filter_map(|column| {
                self.df
                    .column(column.name())
                    .ok()
                    .map(|series| (*column, series.null_count()))
            })
            .collect()
    }

    /// Rows where `mask` is true. Masks shorter than the table are rejected by polars.
    pub fn filter(&self, mask: &BooleanChunked) -> PolarsResult<OrderTable> {
        Ok(OrderTable {
            df: self.df.filter(mask)?,
        })
    }

    pub fn head(&self, rows: usize) -> OrderTable {
        OrderTable {
            df: self.df.head(Some(rows)),
        }
    }
}

/// Where the order data came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub path: String,
    pub format: String,
    pub byte_len: usize,
    pub blake3: String,
}

impl SourceInfo {
    pub fn new(path: &Path, format: &str, content: &[u8]) -> Self {
        Self {
            path: path.display().to_string(),
            format: format.to_string(),
            byte_len: content.len(),
            blake3: blake3::hash(content).to_hex().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedOrders {
    pub source: SourceInfo,
    pub orders: OrderTable,
}
