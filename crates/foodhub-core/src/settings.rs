//! Report settings loaded from an optional `foodhub.toml`.
//!
//! Every field has a default, so an empty file (or no file at all) produces the
//! standard dashboard.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::promotions::PromotionRule;

/// Cost thresholds offered for the "orders below threshold" metric.
pub const COST_THRESHOLD_OPTIONS: [u32; 4] = [20, 30, 40, 50];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Must be one of [`COST_THRESHOLD_OPTIONS`].
    pub cost_threshold: u32,
    pub top_restaurants: usize,
    pub top_customers: usize,
    /// Orders whose preparation plus delivery time exceeds this count as slow.
    pub long_delivery_minutes: i64,
    pub histogram_bins: usize,
    pub preview_rows: usize,
    pub promotion: PromotionRule,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            cost_threshold: 20,
            top_restaurants: 10,
            top_customers: 3,
            long_delivery_minutes: 60,
            histogram_bins: 30,
            preview_rows: 5,
            promotion: PromotionRule::default(),
        }
    }
}

impl ReportSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: ReportSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !COST_THRESHOLD_OPTIONS.contains(&self.cost_threshold) {
            return Err(ReportError::InvalidConfig(format!(
                "cost_threshold must be one of {:?}, got {}",
                COST_THRESHOLD_OPTIONS, self.cost_threshold
            )));
        }
        if self.histogram_bins == 0 {
            return Err(ReportError::InvalidConfig(
                "histogram_bins must be greater than zero".to_string(),
            ));
        }
        if self.promotion.min_average_rating.is_nan() {
            return Err(ReportError::InvalidConfig(
                "promotion.min_average_rating must be a number".to_string(),
            ));
        }
        Ok(())
    }
}
