pub mod describe;
pub mod options;
pub mod report;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use foodhub_parser::{load_orders, LoadedOrders};
use tracing::info;

const DATA_ENV: &str = "FOODHUB_DATA";
const DEFAULT_DATA_FILE: &str = "foodhub_nyc_online_order_data.xlsx";

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Order data file (.csv, .xlsx or .xls). Falls back to $FOODHUB_DATA.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    pub fn resolve(&self) -> PathBuf {
        self.input
            .clone()
            .or_else(|| env::var_os(DATA_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub fn load(&self) -> Result<LoadedOrders> {
        let path = self.resolve();
        info!(path = %path.display(), "loading order data");
        load_orders(&path)
            .with_context(|| format!("failed to load order data from {}", path.display()))
    }
}
