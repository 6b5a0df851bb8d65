use std::collections::HashSet;

use foodhub_parser::OrderTable;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cuisine and day selections. An empty selection leaves that dimension unfiltered.
///
/// A row is kept when it matches any selected cuisine and any selected day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub days: Vec<String>,
}

impl OrderFilter {
    pub fn new(cuisines: Vec<String>, days: Vec<String>) -> Self {
        Self { cuisines, days }
    }

    pub fn is_empty(&self) -> bool {
        self.cuisines.is_empty() && self.days.is_empty()
    }

    pub fn apply(&self, table: &OrderTable) -> PolarsResult<OrderTable> {
        if self.is_empty() {
            return Ok(table.clone());
        }

        let cuisine_column = table.cuisine_type()?;
        let day_column = table.day_of_the_week()?;
        let cuisines: HashSet<&str> = self.cuisines.iter().map(String::as_str).collect();
        let days: HashSet<&str> = self.days.iter().map(String::as_str).collect();

        let mask: Vec<bool> = (0..table.height())
            .map(|idx| {
                selected(&cuisines, cuisine_column.get(idx)) && selected(&days, day_column.get(idx))
            })
            .collect();
        let mask = BooleanChunked::from_slice("filter".into(), &mask);

        let filtered = table.filter(&mask)?;
        debug!(
            before = table.height(),
            after = filtered.height(),
            cuisines = ?self.cuisines,
            days = ?self.days,
            "applied order filter"
        );
        Ok(filtered)
    }
}

/// Missing values never match an active selection.
fn selected(selection: &HashSet<&str>, value: Option<&str>) -> bool {
    selection.is_empty() || value.is_some_and(|value| selection.contains(value))
}
