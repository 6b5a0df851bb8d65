use std::collections::HashSet;

use polars::prelude::*;

use crate::aggregate::{frame_value_counts, value_counts, GroupKey};
use crate::cleaning::CleanedOrders;

/// First `n` entries of a count-descending ranking such as [`value_counts`].
pub fn top_n(counts: &[(String, usize)], n: usize) -> Vec<(String, usize)> {
    counts.iter().take(n).cloned().collect()
}

pub fn top_restaurants(orders: &CleanedOrders, n: usize) -> PolarsResult<Vec<(String, usize)>> {
    Ok(top_n(&value_counts(orders, GroupKey::Restaurant)?, n))
}

pub fn top_customers(orders: &CleanedOrders, n: usize) -> PolarsResult<Vec<(String, usize)>> {
    Ok(top_n(&value_counts(orders, GroupKey::Customer)?, n))
}

/// Most ordered cuisine among orders placed on one of `days`.
pub fn most_popular_cuisine_on(
    orders: &CleanedOrders,
    days: &[&str],
) -> PolarsResult<Option<(String, usize)>> {
    let days: HashSet<&str> = days.iter().copied().collect();
    let day_column = orders.day_of_the_week()?;
    let mask: BooleanChunked = day_column
        .into_iter()
        .map(|day| Some(day.is_some_and(|day| days.contains(day))))
        .collect();

    let selected = orders.df().filter(&mask)?;
    Ok(frame_value_counts(&selected, GroupKey::Cuisine)?
        .into_iter()
        .next())
}
