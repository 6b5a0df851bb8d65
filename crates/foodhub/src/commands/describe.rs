use anyhow::{Context, Result};
use clap::Args;
use foodhub_core::clean_orders;
use foodhub_core::describe::describe;
use foodhub_core::report::TableValue;

use super::InputArgs;
use crate::render::render_table;

#[derive(Args, Debug)]
pub struct DescribeArgs {
    #[command(flatten)]
    input: InputArgs,
}

pub fn handle_describe_command(args: DescribeArgs) -> Result<()> {
    let loaded = args.input.load()?;
    let cleaned = clean_orders(&loaded.orders).context("failed to clean order data")?;
    let summaries = describe(cleaned.df()).context("failed to summarise numeric columns")?;

    println!("{}", render_table(&TableValue::from_summaries(&summaries)));
    Ok(())
}
