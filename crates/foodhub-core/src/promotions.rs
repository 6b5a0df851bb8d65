use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aggregate::{group_stats, GroupKey, Measure, Statistic};
use crate::cleaning::CleanedOrders;

/// Both thresholds are strict: a restaurant qualifies with more than
/// `min_rating_count` ratings and an average above `min_average_rating`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionRule {
    pub min_rating_count: usize,
    pub min_average_rating: f64,
}

impl Default for PromotionRule {
    fn default() -> Self {
        Self {
            min_rating_count: 50,
            min_average_rating: 4.0,
        }
    }
}

impl PromotionRule {
    pub fn is_eligible(&self, rating: &RestaurantRating) -> bool {
        rating.rating_count > self.min_rating_count
            && rating.average_rating > self.min_average_rating
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantRating {
    pub restaurant_name: String,
    pub average_rating: f64,
    pub rating_count: usize,
}

/// Average rating and rating count per restaurant, ordered by name.
///
/// Unrated orders carry a rating of 0 after cleaning, so they are counted and
/// pull the average down.
pub fn restaurant_ratings(orders: &CleanedOrders) -> PolarsResult<Vec<RestaurantRating>> {
    let grouped = group_stats(
        orders,
        GroupKey::Restaurant,
        &[(Measure::Rating, &[Statistic::Mean, Statistic::Count])],
    )?;

    Ok(grouped
        .rows
        .into_iter()
        .map(|row| RestaurantRating {
            restaurant_name: row.key,
            average_rating: row.values[0],
            rating_count: row.values[1] as usize,
        })
        .collect())
}

pub fn eligible_restaurants(
    orders: &CleanedOrders,
    rule: &PromotionRule,
) -> PolarsResult<Vec<RestaurantRating>> {
    Ok(restaurant_ratings(orders)?
        .into_iter()
        .filter(|rating| rule.is_eligible(rating))
        .collect())
}
