use anyhow::{Context, Result};
use clap::Args;
use foodhub_core::settings::COST_THRESHOLD_OPTIONS;
use foodhub_parser::OrderColumn;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct OptionsArgs {
    #[command(flatten)]
    input: InputArgs,
}

/// Prints the values accepted by `report --cuisine`, `--day` and `--cost-threshold`.
pub fn handle_options_command(args: OptionsArgs) -> Result<()> {
    let loaded = args.input.load()?;

    let cuisines = loaded
        .orders
        .distinct(OrderColumn::CuisineType)
        .context("failed to read cuisine types")?;
    let days = loaded
        .orders
        .distinct(OrderColumn::DayOfTheWeek)
        .context("failed to read days of the week")?;

    println!("Cuisine types:");
    for cuisine in &cuisines {
        println!("  {cuisine}");
    }
    println!("\nDays of the week:");
    for day in &days {
        println!("  {day}");
    }
    let thresholds: Vec<String> = COST_THRESHOLD_OPTIONS
        .iter()
        .map(|threshold| format!("${threshold}"))
        .collect();
    println!("\nCost thresholds: {}", thresholds.join(", "));
    Ok(())
}
