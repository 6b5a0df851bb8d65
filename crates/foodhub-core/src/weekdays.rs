use chrono::Weekday;
use polars::prelude::*;
use serde::Serialize;

use crate::aggregate::{group_mean, reindex, GroupKey, Measure};
use crate::cleaning::CleanedOrders;

/// Monday through Sunday. Day-keyed aggregations are reindexed over this list
/// so every day appears even without orders.
pub const CANONICAL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

pub fn canonical_day_names() -> Vec<&'static str> {
    CANONICAL_DAYS.iter().map(|day| day_name(*day)).collect()
}

pub fn weekend_day_names() -> Vec<&'static str> {
    CANONICAL_DAYS
        .iter()
        .filter(|day| is_weekend(**day))
        .map(|day| day_name(*day))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayComparison {
    pub measure: Measure,
    /// Per-day mean over all seven canonical days; 0 for days without orders.
    pub by_day: Vec<(String, f64)>,
    pub weekday_mean: f64,
    pub weekend_mean: f64,
}

/// Weekday and weekend averages of `measure`, each the mean of the per-day means.
///
/// Days without orders enter the average as 0, so a quiet weekday drags the
/// weekday figure towards zero rather than being skipped.
pub fn compare_weekday_weekend(
    orders: &CleanedOrders,
    measure: Measure,
) -> PolarsResult<WeekdayComparison> {
    let per_day = group_mean(orders, GroupKey::Day, measure)?;
    let by_day = reindex(&per_day, &canonical_day_names(), 0.0);

    let mut weekday = Vec::with_capacity(5);
    let mut weekend = Vec::with_capacity(2);
    for (day, (_, value)) in CANONICAL_DAYS.iter().zip(&by_day) {
        if is_weekend(*day) {
            weekend.push(*value);
        } else {
            weekday.push(*value);
        }
    }

    Ok(WeekdayComparison {
        measure,
        by_day,
        weekday_mean: mean_of_means(&weekday),
        weekend_mean: mean_of_means(&weekend),
    })
}

/// Mean of per-day means; days whose own mean is undefined are left out.
fn mean_of_means(day_means: &[f64]) -> f64 {
    let day_means: Float64Chunked = day_means
        .iter()
        .map(|value| (!value.is_nan()).then_some(*value))
        .collect();
    day_means.mean().unwrap_or(f64::NAN)
}
