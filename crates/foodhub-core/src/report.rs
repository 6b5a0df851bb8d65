use chrono::{DateTime, Utc};
use foodhub_parser::{LoadedOrders, OrderTable, SourceInfo};
use polars::prelude::{ChunkCast, DataType};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::aggregate::{
    group_mean, group_stats, value_counts, GroupKey, GroupedStats, Measure, Statistic,
};
use crate::charts::ChartSpec;
use crate::cleaning::{assess_quality, clean_orders};
use crate::describe::{describe, present_values, summarize, ColumnSummary};
use crate::error::Result;
use crate::filters::OrderFilter;
use crate::metrics::{
    apply_derived_metrics, average_delivery_time, net_revenue, percent_cost_below,
    percent_orders_over,
};
use crate::promotions::{eligible_restaurants, RestaurantRating};
use crate::ranking::{most_popular_cuisine_on, top_customers, top_restaurants};
use crate::settings::ReportSettings;
use crate::weekdays::{compare_weekday_weekend, weekend_day_names};

const CONCLUSIONS: &str = "\
From the analysis, we can draw the following conclusions and recommendations:
1. Most Popular Cuisines: Some cuisines are more popular and have higher average ratings. Promoting these cuisines can drive more sales.
2. Weekday vs Weekend Orders: There are more orders on weekends. Special offers during weekends can attract more customers.
3. Preparation and Delivery Times: Preparation times are consistent, but delivery times vary slightly between weekdays and weekends. Improving delivery logistics can enhance customer satisfaction.
4. Customer Engagement: Rewarding the top customers can increase loyalty.
5. Restaurant Performance: Promoting high-performing restaurants can boost their visibility and attract more orders.
6. Revenue Generation: The company generates significant revenue from orders over $20. Encouraging higher spending can increase revenue.
7. Order Efficiency: Reducing the percentage of orders taking more than 60 minutes can improve overall customer satisfaction.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Integer(i64),
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    fn integer(value: Option<i64>) -> Self {
        value.map(Cell::Integer).unwrap_or(Cell::Missing)
    }

    fn text(value: Option<&str>) -> Self {
        value
            .map(|value| Cell::Text(value.to_string()))
            .unwrap_or(Cell::Missing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableValue {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableValue {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn from_counts(key: &str, counts: &[(String, usize)]) -> Self {
        let mut table = Self::new([key, "count"]);
        for (label, count) in counts {
            table.rows.push(vec![Cell::Text(label.clone()), Cell::Integer(*count as i64)]);
        }
        table
    }

    pub fn from_keyed(key: &str, value: &str, entries: &[(String, f64)]) -> Self {
        let mut table = Self::new([key, value]);
        for (label, number) in entries {
            table.rows.push(vec![Cell::Text(label.clone()), Cell::Number(*number)]);
        }
        table
    }

    fn from_grouped(grouped: &GroupedStats) -> Self {
        let mut headers = vec![grouped.key.label().to_string()];
        headers.extend(grouped.columns.iter().map(|column| column.label()));
        let mut table = Self::new(headers);
        for row in &grouped.rows {
            let mut cells = vec![Cell::Text(row.key.clone())];
            cells.extend(row.values.iter().map(|value| Cell::Number(*value)));
            table.rows.push(cells);
        }
        table
    }

    pub fn from_summaries(summaries: &[ColumnSummary]) -> Self {
        let mut table = Self::new([
            "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
        ]);
        for summary in summaries {
            table.rows.push(vec![
                Cell::Text(summary.column.clone()),
                Cell::Integer(summary.count as i64),
                Cell::Number(summary.mean),
                Cell::Number(summary.std),
                Cell::Number(summary.min),
                Cell::Number(summary.q25),
                Cell::Number(summary.median),
                Cell::Number(summary.q75),
                Cell::Number(summary.max),
            ]);
        }
        table
    }

    fn from_ratings(ratings: &[RestaurantRating]) -> Self {
        let mut table = Self::new(["restaurant_name", "average_rating", "rating_count"]);
        for rating in ratings {
            table.rows.push(vec![
                Cell::Text(rating.restaurant_name.clone()),
                Cell::Number(rating.average_rating),
                Cell::Integer(rating.rating_count as i64),
            ]);
        }
        table
    }

    fn preview(orders: &OrderTable) -> polars::prelude::PolarsResult<Self> {
        let order_id = orders.order_id()?;
        let customer_id = orders.customer_id()?;
        let restaurant = orders.restaurant_name()?;
        let cuisine = orders.cuisine_type()?;
        let cost = orders.cost_of_the_order()?;
        let day = orders.day_of_the_week()?;
        let rating = orders.rating()?;
        let preparation = orders.food_preparation_time()?;
        let delivery = orders.delivery_time()?;

        let mut table = Self::new(
            foodhub_parser::ORDER_COLUMNS
                .iter()
                .map(|column| column.name()),
        );
        for idx in 0..orders.height() {
            table.rows.push(vec![
                Cell::integer(order_id.get(idx)),
                Cell::integer(customer_id.get(idx)),
                Cell::text(restaurant.get(idx)),
                Cell::text(cuisine.get(idx)),
                Cell::text(cost.get(idx)),
                Cell::text(day.get(idx)),
                Cell::text(rating.get(idx)),
                Cell::integer(preparation.get(idx)),
                Cell::integer(delivery.get(idx)),
            ]);
        }
        Ok(table)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ReportValue {
    Number(f64),
    Count(usize),
    Flag(bool),
    Text(String),
    Table(TableValue),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportItem {
    pub title: String,
    pub value: ReportValue,
    pub chart: Option<ChartSpec>,
}

impl ReportItem {
    fn new(title: impl Into<String>, value: ReportValue) -> Self {
        Self {
            title: title.into(),
            value,
            chart: None,
        }
    }

    fn with_chart(mut self, chart: ChartSpec) -> Self {
        self.chart = Some(chart);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub source: SourceInfo,
    pub filter: OrderFilter,
    pub cost_threshold: u32,
    pub rows_loaded: usize,
    pub rows_selected: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub items: Vec<ReportItem>,
}

impl Report {
    pub fn item(&self, title: &str) -> Option<&ReportItem> {
        self.items.iter().find(|item| item.title == title)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the full pipeline over `loaded`: filter, clean, aggregate, and collect
/// every dashboard value in display order.
pub fn build_report(
    loaded: &LoadedOrders,
    filter: &OrderFilter,
    settings: &ReportSettings,
) -> Result<Report> {
    settings.validate()?;

    let filtered = filter.apply(&loaded.orders)?;
    info!(
        rows_loaded = loaded.orders.height(),
        rows_selected = filtered.height(),
        "filtered order data"
    );
    if filtered.is_empty() {
        warn!("no orders match the selected filters; statistics will be undefined");
    }

    let cleaned = clean_orders(&filtered)?;
    let quality = assess_quality(&filtered, &cleaned)?;
    let mut items = Vec::new();

    items.push(ReportItem::new(
        "Data Preview",
        ReportValue::Table(TableValue::preview(&filtered.head(settings.preview_rows))?),
    ));

    let summaries = describe(cleaned.df())?;
    items.push(ReportItem::new(
        "Summary Statistics",
        ReportValue::Table(TableValue::from_summaries(&summaries)),
    ));

    let preparation_minutes = cleaned
        .food_preparation_time()?
        .cast(&DataType::Float64)?;
    let preparation_minutes = preparation_minutes.f64()?;
    let preparation_range = summarize(preparation_minutes);
    items.push(
        ReportItem::new(
            "Preparation Time Statistics",
            ReportValue::Table(TableValue::from_keyed(
                "statistic",
                "minutes",
                &[
                    ("Minimum".to_string(), preparation_range.min),
                    ("Average".to_string(), preparation_range.mean),
                    ("Maximum".to_string(), preparation_range.max),
                ],
            )),
        )
        .with_chart(ChartSpec::histogram(
            "Food Preparation Time Distribution",
            "food_preparation_time",
            &present_values(preparation_minutes),
            settings.histogram_bins,
        )),
    );

    items.push(ReportItem::new(
        "Number of Unrated Orders",
        ReportValue::Count(quality.unrated_orders),
    ));
    items.push(ReportItem::new(
        "Is the data clean?",
        ReportValue::Flag(quality.is_clean),
    ));
    debug!(total_missing = quality.total_missing, "assessed data quality");

    let popular_cuisines = value_counts(&cleaned, GroupKey::Cuisine)?;
    items.push(
        ReportItem::new(
            "Popular Cuisine Types",
            ReportValue::Table(TableValue::from_counts("cuisine_type", &popular_cuisines)),
        )
        .with_chart(count_chart(
            "Most Popular Cuisine Types",
            "Cuisine Type",
            &popular_cuisines,
        )),
    );

    let cuisine_stats = group_stats(
        &cleaned,
        GroupKey::Cuisine,
        &[
            (
                Measure::Cost,
                &[Statistic::Mean, Statistic::Median, Statistic::Min, Statistic::Max],
            ),
            (Measure::Rating, &[Statistic::Mean, Statistic::Count]),
        ],
    )?;
    items.push(ReportItem::new(
        "Cuisine Statistics",
        ReportValue::Table(TableValue::from_grouped(&cuisine_stats)),
    ));

    let orders_by_day = value_counts(&cleaned, GroupKey::Day)?;
    items.push(
        ReportItem::new(
            "Orders by Day of the Week",
            ReportValue::Table(TableValue::from_counts("day_of_the_week", &orders_by_day)),
        )
        .with_chart(count_chart(
            "Orders on Weekdays vs Weekends",
            "Day of the Week",
            &orders_by_day,
        )),
    );

    let preparation_by_day = group_mean(&cleaned, GroupKey::Day, Measure::PreparationTime)?;
    items.push(keyed_item(
        "Preparation Time by Day of the Week",
        "Preparation Time on Weekdays vs Weekends",
        GroupKey::Day,
        "Average Preparation Time (minutes)",
        &preparation_by_day,
    ));

    let delivery_by_day = group_mean(&cleaned, GroupKey::Day, Measure::DeliveryTime)?;
    items.push(keyed_item(
        "Delivery Time by Day of the Week",
        "Delivery Time on Weekdays vs Weekends",
        GroupKey::Day,
        "Average Delivery Time (minutes)",
        &delivery_by_day,
    ));

    let restaurants = top_restaurants(&cleaned, settings.top_restaurants)?;
    items.push(
        ReportItem::new(
            "Top Restaurants",
            ReportValue::Table(TableValue::from_counts("restaurant_name", &restaurants)),
        )
        .with_chart(count_chart(
            "Top Restaurants with Orders Received",
            "Restaurant Name",
            &restaurants,
        )),
    );

    let weekend_cuisine = most_popular_cuisine_on(&cleaned, &weekend_day_names())?;
    items.push(ReportItem::new(
        "Most Popular Cuisine Type on Weekends",
        ReportValue::Table(TableValue::from_counts(
            "cuisine_type",
            weekend_cuisine.as_slice(),
        )),
    ));

    let threshold = f64::from(settings.cost_threshold);
    let costs = present_values(cleaned.cost()?);
    items.push(
        ReportItem::new(
            format!("Percentage of Orders Less Than ${}", settings.cost_threshold),
            ReportValue::Number(percent_cost_below(&cleaned, threshold)?),
        )
        .with_chart(
            ChartSpec::histogram(
                "Order Cost Distribution",
                "cost_of_the_order",
                &costs,
                settings.histogram_bins,
            )
            .with_marker(threshold),
        ),
    );

    items.push(ReportItem::new(
        "Average Delivery Time in NYC",
        ReportValue::Number(average_delivery_time(&cleaned)?),
    ));

    let customers = top_customers(&cleaned, settings.top_customers)?;
    items.push(ReportItem::new(
        format!("Top {} Most Frequent Customers", settings.top_customers),
        ReportValue::Table(TableValue::from_counts("customer_id", &customers)),
    ));

    let cuisine_costs = group_mean(&cleaned, GroupKey::Cuisine, Measure::Cost)?;
    items.push(keyed_item(
        "Cost Comparison by Cuisine Type",
        "Average Cost by Cuisine Type",
        GroupKey::Cuisine,
        "Average Cost ($)",
        &cuisine_costs,
    ));

    let cuisine_ratings = group_mean(&cleaned, GroupKey::Cuisine, Measure::Rating)?;
    items.push(keyed_item(
        "Ratings by Cuisine Type",
        "Average Ratings by Cuisine Type",
        GroupKey::Cuisine,
        "Average Rating",
        &cuisine_ratings,
    ));

    let cuisine_preparation = group_mean(&cleaned, GroupKey::Cuisine, Measure::PreparationTime)?;
    items.push(keyed_item(
        "Preparation Time by Cuisine Type",
        "Average Preparation Time by Cuisine Type",
        GroupKey::Cuisine,
        "Average Preparation Time (minutes)",
        &cuisine_preparation,
    ));

    let eligible = eligible_restaurants(&cleaned, &settings.promotion)?;
    info!(eligible = eligible.len(), "evaluated promotional offer eligibility");
    items.push(ReportItem::new(
        "Restaurants Eligible for Promotional Offer",
        ReportValue::Table(TableValue::from_ratings(&eligible)),
    ));

    let derived = apply_derived_metrics(&cleaned)?;
    items.push(ReportItem::new(
        "Net Revenue Generated by the Company",
        ReportValue::Number(net_revenue(&derived)?),
    ));
    items.push(ReportItem::new(
        format!(
            "Percentage of Orders Taking More Than {} Minutes",
            settings.long_delivery_minutes
        ),
        ReportValue::Number(percent_orders_over(&derived, settings.long_delivery_minutes)?),
    ));

    let comparison = compare_weekday_weekend(&cleaned, Measure::DeliveryTime)?;
    items.push(ReportItem::new(
        "Average Delivery Time on Weekdays",
        ReportValue::Number(comparison.weekday_mean),
    ));
    items.push(ReportItem::new(
        "Average Delivery Time on Weekends",
        ReportValue::Number(comparison.weekend_mean),
    ));

    items.push(ReportItem::new(
        "Conclusions",
        ReportValue::Text(CONCLUSIONS.to_string()),
    ));

    let metadata = ReportMetadata {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        source: loaded.source.clone(),
        filter: filter.clone(),
        cost_threshold: settings.cost_threshold,
        rows_loaded: loaded.orders.height(),
        rows_selected: filtered.height(),
    };
    info!(run_id = %metadata.run_id, items = items.len(), "report assembled");

    Ok(Report { metadata, items })
}

fn count_chart(title: &str, x_label: &str, counts: &[(String, usize)]) -> ChartSpec {
    ChartSpec::bar(
        title,
        x_label,
        "Number of Orders",
        counts
            .iter()
            .map(|(label, count)| (label.clone(), *count as f64)),
    )
}

fn keyed_item(
    title: &str,
    chart_title: &str,
    key: GroupKey,
    y_label: &str,
    entries: &[(String, f64)],
) -> ReportItem {
    ReportItem::new(
        title,
        ReportValue::Table(TableValue::from_keyed(key.label(), y_label, entries)),
    )
    .with_chart(ChartSpec::bar(
        chart_title,
        key.label(),
        y_label,
        entries.iter().cloned(),
    ))
}
