use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage kind of a column once the file has been loaded.
///
/// `cost_of_the_order` and `rating` stay as raw text: the source data mixes
/// numbers with placeholders such as "Not given", and numeric coercion is a
/// separate cleaning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
}

impl ColumnKind {
    pub fn dtype_name(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "i64",
            ColumnKind::Text => "str",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderColumn {
    OrderId,
    CustomerId,
    RestaurantName,
    CuisineType,
    CostOfTheOrder,
    DayOfTheWeek,
    Rating,
    FoodPreparationTime,
    DeliveryTime,
}

impl OrderColumn {
    pub fn name(&self) -> &'static str {
        match self {
            OrderColumn::OrderId => "order_id",
            OrderColumn::CustomerId => "customer_id",
            OrderColumn::RestaurantName => "restaurant_name",
            OrderColumn::CuisineType => "cuisine_type",
            OrderColumn::CostOfTheOrder => "cost_of_the_order",
            OrderColumn::DayOfTheWeek => "day_of_the_week",
            OrderColumn::Rating => "rating",
            OrderColumn::FoodPreparationTime => "food_preparation_time",
            OrderColumn::DeliveryTime => "delivery_time",
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            OrderColumn::OrderId
            | OrderColumn::CustomerId
            | OrderColumn::FoodPreparationTime
            | OrderColumn::DeliveryTime => ColumnKind::Integer,
            OrderColumn::RestaurantName
            | OrderColumn::CuisineType
            | OrderColumn::CostOfTheOrder
            | OrderColumn::DayOfTheWeek
            | OrderColumn::Rating => ColumnKind::Text,
        }
    }

    /// `order_id` is numbered from 1 when the file does not carry it.
    pub fn is_required(&self) -> bool {
        !matches!(self, OrderColumn::OrderId)
    }

    pub fn from_header(header: &str) -> Option<Self> {
        let trimmed = header.trim();
        ORDER_COLUMNS
            .iter()
            .copied()
            .find(|column| column.name() == trimmed)
    }
}

impl fmt::Display for OrderColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column order of every loaded `OrderTable`.
pub const ORDER_COLUMNS: [OrderColumn; 9] = [
    OrderColumn::OrderId,
    OrderColumn::CustomerId,
    OrderColumn::RestaurantName,
    OrderColumn::CuisineType,
    OrderColumn::CostOfTheOrder,
    OrderColumn::DayOfTheWeek,
    OrderColumn::Rating,
    OrderColumn::FoodPreparationTime,
    OrderColumn::DeliveryTime,
];
