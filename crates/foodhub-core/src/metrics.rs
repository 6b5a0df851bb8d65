use polars::prelude::*;

use crate::cleaning::{CleanedOrders, COMPANY_REVENUE_COLUMN, TOTAL_TIME_COLUMN};
use crate::describe::or_nan;

const HIGH_TIER_MIN_COST: f64 = 20.0;
const HIGH_TIER_RATE: f64 = 0.25;
const LOW_TIER_MIN_COST: f64 = 5.0;
const LOW_TIER_RATE: f64 = 0.15;

/// Commission on one order. Tier bounds are exclusive: a cost of exactly 20
/// earns 15%, exactly 5 earns nothing. A missing cost earns nothing.
pub fn company_revenue(cost: Option<f64>) -> f64 {
    match cost {
        Some(cost) if cost > HIGH_TIER_MIN_COST => cost * HIGH_TIER_RATE,
        Some(cost) if cost > LOW_TIER_MIN_COST => cost * LOW_TIER_RATE,
        _ => 0.0,
    }
}

/// Preparation plus delivery minutes; missing when either part is missing or
/// the sum overflows.
pub fn total_time(preparation: Option<i64>, delivery: Option<i64>) -> Option<i64> {
    preparation?.checked_add(delivery?)
}

/// Appends `company_revenue` and `total_time` columns.
pub fn apply_derived_metrics(orders: &CleanedOrders) -> PolarsResult<CleanedOrders> {
    let cost = orders.cost()?;
    let preparation = orders.food_preparation_time()?;
    let delivery = orders.delivery_time()?;
    let len = orders.height();

    let mut revenue = Vec::with_capacity(len);
    let mut total = Vec::with_capacity(len);
    for idx in 0..len {
        revenue.push(company_revenue(cost.get(idx)));
        total.push(total_time(preparation.get(idx), delivery.get(idx)));
    }

    orders.with_columns(&[
        Series::new(COMPANY_REVENUE_COLUMN.into(), revenue).into(),
        Series::new(TOTAL_TIME_COLUMN.into(), total).into(),
    ])
}

/// Sum of `company_revenue`; 0 for an empty set.
pub fn net_revenue(orders: &CleanedOrders) -> PolarsResult<f64> {
    Ok(orders.company_revenue()?.sum().unwrap_or(0.0))
}

/// Percentage of orders whose total time is strictly above `minutes`.
/// Orders with a missing total count as not exceeding it.
pub fn percent_orders_over(orders: &CleanedOrders, minutes: i64) -> PolarsResult<f64> {
    let total = orders.total_time()?;
    Ok(percentage(&total.gt(minutes)))
}

/// Percentage of orders with cost strictly below `threshold`.
/// Orders with a missing cost count as not below it.
pub fn percent_cost_below(orders: &CleanedOrders, threshold: f64) -> PolarsResult<f64> {
    let cost = orders.cost()?;
    Ok(percentage(&cost.lt(threshold)))
}

pub fn average_delivery_time(orders: &CleanedOrders) -> PolarsResult<f64> {
    Ok(or_nan(orders.delivery_time()?.mean()))
}

/// Share of true values among all rows, nulls included; NaN when empty.
fn percentage(hits: &BooleanChunked) -> f64 {
    if hits.is_empty() {
        return f64::NAN;
    }
    let count = hits.sum().unwrap_or(0);
    count as f64 / hits.len() as f64 * 100.0
}
