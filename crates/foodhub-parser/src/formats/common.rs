use std::collections::HashMap;

use polars::prelude::*;

use crate::errors::SchemaError;
use crate::formats::schema::{OrderColumn, ORDER_COLUMNS};
use crate::model::{OrderRow, OrderTable};

/// Position of each known column in the source header row.
#[derive(Debug, Clone)]
pub(crate) struct HeaderIndex {
    positions: HashMap<OrderColumn, usize>,
}

impl HeaderIndex {
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, SchemaError> {
        let mut positions = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if let Some(column) = OrderColumn::from_header(header.as_ref()) {
                positions.entry(column).or_insert(idx);
            }
        }

        for column in ORDER_COLUMNS {
            if column.is_required() && !positions.contains_key(&column) {
                return Err(SchemaError::MissingColumn {
                    column: column.name(),
                });
            }
        }

        Ok(Self { positions })
    }

    pub fn position(&self, column: OrderColumn) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    /// Reads one data row. `row` is the 1-based data row number (header excluded)
    /// and doubles as the order id when the file has no `order_id` column.
    pub fn parse_row<F>(&self, parser: &'static str, row: usize, cell: F) -> Result<OrderRow, SchemaError>
    where
        F: Fn(usize) -> Option<String>,
    {
        let text = |column: OrderColumn| -> Option<String> {
            self.position(column)
                .and_then(&cell)
                .and_then(normalize_cell)
        };
        let integer = |column: OrderColumn| -> Result<Option<i64>, SchemaError> {
            match text(column) {
                Some(value) => parse_integer(&value).map(Some).ok_or(SchemaError::InvalidValue {
                    parser,
                    column: column.name(),
                    row,
                    value,
                }),
                None => Ok(None),
            }
        };

        let order_id = match self.position(OrderColumn::OrderId) {
            Some(_) => integer(OrderColumn::OrderId)?,
            None => Some(row as i64),
        };

        Ok(OrderRow {
            order_id,
            customer_id: integer(OrderColumn::CustomerId)?,
            restaurant_name: text(OrderColumn::RestaurantName),
            cuisine_type: text(OrderColumn::CuisineType),
            cost_of_the_order: text(OrderColumn::CostOfTheOrder),
            day_of_the_week: text(OrderColumn::DayOfTheWeek),
            rating: text(OrderColumn::Rating),
            food_preparation_time: integer(OrderColumn::FoodPreparationTime)?,
            delivery_time: integer(OrderColumn::DeliveryTime)?,
        })
    }
}

/// Empty or whitespace-only cells are missing values.
pub(crate) fn normalize_cell(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == raw.len() {
        Some(raw)
    } else {
        Some(trimmed.to_string())
    }
}

/// Accepts plain integers and floats with no fractional part ("12.0").
pub(crate) fn parse_integer(value: &str) -> Option<i64> {
    if let Ok(parsed) = value.parse::<i64>() {
        return Some(parsed);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| is_whole_i64(*parsed))
        .map(|parsed| parsed as i64)
}

/// Whole numbers inside the i64 range. `i64::MAX as f64` rounds up to 2^63,
/// so the upper bound is exclusive.
pub(crate) fn is_whole_i64(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
}

/// Column-wise accumulator for `OrderTable`.
#[derive(Debug, Default)]
pub(crate) struct OrderColumns {
    order_id: Vec<Option<i64>>,
    customer_id: Vec<Option<i64>>,
    restaurant_name: Vec<Option<String>>,
    cuisine_type: Vec<Option<String>>,
    cost_of_the_order: Vec<Option<String>>,
    day_of_the_week: Vec<Option<String>>,
    rating: Vec<Option<String>>,
    food_preparation_time: Vec<Option<i64>>,
    delivery_time: Vec<Option<i64>>,
}

impl OrderColumns {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order_id: Vec::with_capacity(capacity),
            customer_id: Vec::with_capacity(capacity),
            restaurant_name: Vec::with_capacity(capacity),
            cuisine_type: Vec::with_capacity(capacity),
            cost_of_the_order: Vec::with_capacity(capacity),
            day_of_the_week: Vec::with_capacity(capacity),
            rating: Vec::with_capacity(capacity),
            food_preparation_time: Vec::with_capacity(capacity),
            delivery_time: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: OrderRow) {
        self.order_id.push(row.order_id);
        self.customer_id.push(row.customer_id);
        self.restaurant_name.push(row.restaurant_name);
        self.cuisine_type.push(row.cuisine_type);
        self.cost_of_the_order.push(row.cost_of_the_order);
        self.day_of_the_week.push(row.day_of_the_week);
        self.rating.push(row.rating);
        self.food_preparation_time.push(row.food_preparation_time);
        self.delivery_time.push(row.delivery_time);
    }

    pub fn len(&self) -> usize {
        self.order_id.len()
    }

    pub fn build(self) -> Result<OrderTable, SchemaError> {
        let columns: Vec<Column> = vec![
            Series::new(OrderColumn::OrderId.name().into(), self.order_id).into(),
            Series::new(OrderColumn::CustomerId.name().into(), self.customer_id).into(),
            text_series(OrderColumn::RestaurantName, &self.restaurant_name).into(),
            text_series(OrderColumn::CuisineType, &self.cuisine_type).into(),
            text_series(OrderColumn::CostOfTheOrder, &self.cost_of_the_order).into(),
            text_series(OrderColumn::DayOfTheWeek, &self.day_of_the_week).into(),
            text_series(OrderColumn::Rating, &self.rating).into(),
            Series::new(
                OrderColumn::FoodPreparationTime.name().into(),
                self.food_preparation_time,
            )
            .into(),
            Series::new(OrderColumn::DeliveryTime.name().into(), self.delivery_time).into(),
        ];

        OrderTable::new(DataFrame::new(columns)?)
    }
}

fn text_series(column: OrderColumn, values: &[Option<String>]) -> Series {
    let values: Vec<Option<&str>> = values.iter().map(|value| value.as_deref()).collect();
    Series::new(column.name().into(), values)
}
